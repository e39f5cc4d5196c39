pub mod normalizer;

pub use normalizer::TextNormalizer;
