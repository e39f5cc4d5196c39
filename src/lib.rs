pub mod collect;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod sentiment;
pub mod sources;
pub mod text;

pub use collect::Collector;
pub use config::{Config, RedditConfig, TwitterConfig};
pub use error::{Error, Result};
pub use models::{CommentRecord, SentimentLabel, SentimentSummary, SummaryRow};
pub use sentiment::{LexiconScorer, PolarityScorer, SentimentClassifier};
pub use sources::{RedditAdapter, SourceAdapter, TwitterAdapter};
pub use text::TextNormalizer;
