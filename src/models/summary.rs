use serde::{Deserialize, Serialize};

use crate::models::record::{CommentRecord, SentimentLabel};

/// Sentiment counts for one (app, platform) pair. Labels that never occurred
/// are explicit zeros so downstream consumers always see all three columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRow {
    pub app: String,
    pub platform: String,
    pub positive: u32,
    pub negative: u32,
    pub neutral: u32,
}

impl SummaryRow {
    pub fn total(&self) -> u32 {
        self.positive + self.negative + self.neutral
    }
}

/// Aggregate view over a record sequence, recomputed fresh on each call.
/// Rows appear in first-seen (app, platform) order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SentimentSummary {
    pub rows: Vec<SummaryRow>,
}

impl SentimentSummary {
    pub fn from_records(records: &[CommentRecord]) -> Self {
        let mut rows: Vec<SummaryRow> = Vec::new();

        for record in records {
            let idx = rows
                .iter()
                .position(|r| r.app == record.app && r.platform == record.platform)
                .unwrap_or_else(|| {
                    rows.push(SummaryRow {
                        app: record.app.clone(),
                        platform: record.platform.clone(),
                        positive: 0,
                        negative: 0,
                        neutral: 0,
                    });
                    rows.len() - 1
                });
            let row = &mut rows[idx];

            match record.sentiment {
                SentimentLabel::Positive => row.positive += 1,
                SentimentLabel::Negative => row.negative += 1,
                SentimentLabel::Neutral => row.neutral += 1,
            }
        }

        Self { rows }
    }

    pub fn total_records(&self) -> u32 {
        self.rows.iter().map(|r| r.total()).sum()
    }
}
