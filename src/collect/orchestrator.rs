use chrono::Utc;
use indicatif::{ProgressBar, ProgressStyle};

use crate::models::CommentRecord;
use crate::sentiment::SentimentClassifier;
use crate::sources::SourceAdapter;
use crate::text::TextNormalizer;

/// Walks the (app × platform) cross product sequentially, fetching, cleaning
/// and classifying comments into a flat record sequence.
pub struct Collector {
    adapters: Vec<Box<dyn SourceAdapter>>,
    normalizer: TextNormalizer,
    classifier: SentimentClassifier,
}

impl Collector {
    pub fn new(adapters: Vec<Box<dyn SourceAdapter>>) -> Self {
        Self {
            adapters,
            normalizer: TextNormalizer::new(),
            classifier: SentimentClassifier::lexicon(),
        }
    }

    pub fn with_classifier(mut self, classifier: SentimentClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// Collects records for every ordered (app, platform) pair. Adapter
    /// failures and unknown platform names degrade to zero comments for that
    /// pair; this never returns partial results or fails outright.
    pub async fn collect(
        &self,
        apps: &[String],
        platforms: &[String],
        limit: u32,
    ) -> Vec<CommentRecord> {
        let pairs = (apps.len() * platforms.len()) as u64;
        let pb = ProgressBar::new(pairs);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} pairs")
                .unwrap()
                .progress_chars("#>-"),
        );

        let mut records = Vec::new();

        for app in apps {
            for platform in platforms {
                tracing::info!("Collecting comments for {} on {}", app, platform);

                let (platform_name, comments) = match self.adapter_for(platform) {
                    Some(adapter) => {
                        let query = adapter.build_query(app);
                        let comments = match adapter.fetch(&query, limit).await {
                            Ok(comments) => comments,
                            Err(e) => {
                                tracing::warn!(
                                    "Fetch failed for {} on {}: {}",
                                    app,
                                    platform,
                                    e
                                );
                                Vec::new()
                            }
                        };
                        (adapter.platform().to_string(), comments)
                    }
                    None => {
                        tracing::debug!("No adapter for platform {}, skipping", platform);
                        (platform.clone(), Vec::new())
                    }
                };

                tracing::info!(
                    "Collected {} comments from {} for {}",
                    comments.len(),
                    platform,
                    app
                );

                for comment in comments {
                    let cleaned = self.normalizer.normalize(&comment);
                    let sentiment = self.classifier.classify(&cleaned);

                    records.push(CommentRecord {
                        app: app.clone(),
                        platform: platform_name.clone(),
                        comment,
                        cleaned_comment: cleaned,
                        sentiment,
                        collected_at: Utc::now(),
                    });
                }

                pb.inc(1);
            }
        }

        pb.finish_with_message("Collection complete");
        records
    }

    fn adapter_for(&self, platform: &str) -> Option<&dyn SourceAdapter> {
        self.adapters
            .iter()
            .find(|a| a.platform().eq_ignore_ascii_case(platform))
            .map(|a| a.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Result};
    use crate::models::SentimentLabel;
    use async_trait::async_trait;

    struct StaticAdapter {
        platform: &'static str,
        comments: Vec<&'static str>,
    }

    #[async_trait]
    impl SourceAdapter for StaticAdapter {
        fn platform(&self) -> &str {
            self.platform
        }

        fn build_query(&self, app: &str) -> String {
            app.to_string()
        }

        async fn fetch(&self, _query: &str, limit: u32) -> Result<Vec<String>> {
            let mut comments: Vec<String> =
                self.comments.iter().map(|c| c.to_string()).collect();
            comments.truncate(limit as usize);
            Ok(comments)
        }
    }

    struct FailingAdapter {
        platform: &'static str,
    }

    #[async_trait]
    impl SourceAdapter for FailingAdapter {
        fn platform(&self) -> &str {
            self.platform
        }

        fn build_query(&self, app: &str) -> String {
            app.to_string()
        }

        async fn fetch(&self, _query: &str, _limit: u32) -> Result<Vec<String>> {
            Err(Error::TwitterApi("simulated outage".to_string()))
        }
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_records_share_app_and_platform() {
        let collector = Collector::new(vec![Box::new(StaticAdapter {
            platform: "Twitter",
            comments: vec!["great service", "terrible delays"],
        })]);

        let records = collector
            .collect(&strings(&["Amazon"]), &strings(&["Twitter"]), 2)
            .await;

        assert_eq!(records.len(), 2);
        for record in &records {
            assert_eq!(record.app, "Amazon");
            assert_eq!(record.platform, "Twitter");
        }
        assert_eq!(records[0].sentiment, SentimentLabel::Positive);
        assert_eq!(records[1].sentiment, SentimentLabel::Negative);
    }

    #[tokio::test]
    async fn test_unknown_platform_yields_no_records() {
        let collector = Collector::new(vec![Box::new(StaticAdapter {
            platform: "Twitter",
            comments: vec!["anything"],
        })]);

        let records = collector
            .collect(&strings(&["X"]), &strings(&["UnknownPlatform"]), 10)
            .await;

        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_adapter_failure_is_isolated() {
        let collector = Collector::new(vec![
            Box::new(FailingAdapter { platform: "Twitter" }),
            Box::new(StaticAdapter {
                platform: "Reddit",
                comments: vec!["works fine"],
            }),
        ]);

        let records = collector
            .collect(
                &strings(&["Amazon"]),
                &strings(&["Twitter", "Reddit"]),
                10,
            )
            .await;

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].platform, "Reddit");
    }

    #[tokio::test]
    async fn test_cross_product_order_apps_outer() {
        let collector = Collector::new(vec![
            Box::new(StaticAdapter {
                platform: "Twitter",
                comments: vec!["t"],
            }),
            Box::new(StaticAdapter {
                platform: "Reddit",
                comments: vec!["r"],
            }),
        ]);

        let records = collector
            .collect(
                &strings(&["A", "B"]),
                &strings(&["Twitter", "Reddit"]),
                5,
            )
            .await;

        let pairs: Vec<(String, String)> = records
            .iter()
            .map(|r| (r.app.clone(), r.platform.clone()))
            .collect();

        assert_eq!(
            pairs,
            vec![
                ("A".to_string(), "Twitter".to_string()),
                ("A".to_string(), "Reddit".to_string()),
                ("B".to_string(), "Twitter".to_string()),
                ("B".to_string(), "Reddit".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_platform_match_is_case_insensitive() {
        let collector = Collector::new(vec![Box::new(StaticAdapter {
            platform: "Twitter",
            comments: vec!["hello"],
        })]);

        let records = collector
            .collect(&strings(&["Amazon"]), &strings(&["twitter"]), 5)
            .await;

        assert_eq!(records.len(), 1);
        // Records carry the adapter's canonical name.
        assert_eq!(records[0].platform, "Twitter");
    }

    #[tokio::test]
    async fn test_limit_bounds_comments_per_pair() {
        let collector = Collector::new(vec![Box::new(StaticAdapter {
            platform: "Twitter",
            comments: vec!["one", "two", "three", "four"],
        })]);

        let records = collector
            .collect(&strings(&["Amazon"]), &strings(&["Twitter"]), 2)
            .await;

        assert_eq!(records.len(), 2);
    }
}
