pub mod classifier;
pub mod lexicon;
pub mod scorer;

pub use classifier::{SentimentClassifier, NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD};
pub use lexicon::ReviewLexicon;
pub use scorer::{LexiconScorer, PolarityScorer};
