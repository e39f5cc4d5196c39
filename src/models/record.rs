use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Three-way sentiment category assigned to every collected comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        };
        write!(f, "{}", s)
    }
}

/// One collected comment with its provenance and classification.
///
/// `cleaned_comment` is a pure function of `comment`, and `sentiment` a pure
/// function of `cleaned_comment`; records are never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentRecord {
    pub app: String,
    pub platform: String,
    pub comment: String,
    pub cleaned_comment: String,
    pub sentiment: SentimentLabel,
    pub collected_at: DateTime<Utc>,
}
