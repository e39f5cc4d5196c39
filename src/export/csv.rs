use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::error::Result;
use crate::models::{CommentRecord, SentimentSummary};

/// Writes the flat record table. Destination is truncated on every run;
/// export failures are fatal, there is no partial-success state.
pub fn write_records(path: &Path, records: &[CommentRecord]) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = Writer::from_writer(file);

    writer.write_record(["App", "Platform", "Comment", "Cleaned_Comment", "Sentiment"])?;

    for record in records {
        writer.write_record([
            record.app.clone(),
            record.platform.clone(),
            record.comment.clone(),
            record.cleaned_comment.clone(),
            record.sentiment.to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Writes the per-(app, platform) sentiment counts with all three label
/// columns present, absent labels filled with zero.
pub fn write_summary(path: &Path, summary: &SentimentSummary) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = Writer::from_writer(file);

    writer.write_record(["App", "Platform", "Positive", "Negative", "Neutral"])?;

    for row in &summary.rows {
        writer.write_record([
            row.app.clone(),
            row.platform.clone(),
            row.positive.to_string(),
            row.negative.to_string(),
            row.neutral.to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SentimentLabel;
    use chrono::Utc;
    use csv::Reader;

    fn record(app: &str, sentiment: SentimentLabel) -> CommentRecord {
        CommentRecord {
            app: app.to_string(),
            platform: "Twitter".to_string(),
            comment: "Great, really!".to_string(),
            cleaned_comment: "great really".to_string(),
            sentiment,
            collected_at: Utc::now(),
        }
    }

    #[test]
    fn test_write_records_round_trips() {
        let path = std::env::temp_dir().join("appsentiment_test_raw.csv");
        let records = vec![
            record("Amazon", SentimentLabel::Positive),
            record("eBay", SentimentLabel::Neutral),
        ];

        write_records(&path, &records).unwrap();

        let mut reader = Reader::from_path(&path).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(
            headers.iter().collect::<Vec<_>>(),
            vec!["App", "Platform", "Comment", "Cleaned_Comment", "Sentiment"]
        );

        let rows: Vec<_> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "Amazon");
        assert_eq!(&rows[0][4], "Positive");
        assert_eq!(&rows[1][4], "Neutral");

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_write_summary_has_explicit_zero_columns() {
        let path = std::env::temp_dir().join("appsentiment_test_summary.csv");
        let summary = SentimentSummary::from_records(&[
            record("Amazon", SentimentLabel::Positive),
            record("Amazon", SentimentLabel::Positive),
            record("Amazon", SentimentLabel::Negative),
        ]);

        write_summary(&path, &summary).unwrap();

        let mut reader = Reader::from_path(&path).unwrap();
        let rows: Vec<_> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][2], "2");
        assert_eq!(&rows[0][3], "1");
        assert_eq!(&rows[0][4], "0");

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_write_overwrites_previous_run() {
        let path = std::env::temp_dir().join("appsentiment_test_overwrite.csv");

        write_records(&path, &[record("Amazon", SentimentLabel::Positive)]).unwrap();
        write_records(&path, &[]).unwrap();

        let mut reader = Reader::from_path(&path).unwrap();
        assert_eq!(reader.records().count(), 0);

        std::fs::remove_file(&path).ok();
    }
}
