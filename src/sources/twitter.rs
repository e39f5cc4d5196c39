use async_trait::async_trait;
use reqwest::{header, Client};
use serde::Deserialize;

use crate::config::TwitterConfig;
use crate::error::{Error, Result};
use crate::sources::SourceAdapter;

// Recent-search accepts max_results in 10..=100 only.
const MIN_PAGE_SIZE: u32 = 10;
const MAX_PAGE_SIZE: u32 = 100;

/// Keyword search over recent short posts, app-only (bearer) auth.
pub struct TwitterAdapter {
    client: Client,
    base_url: String,
}

#[derive(Deserialize)]
struct SearchResponse {
    // Omitted entirely when the query matches nothing.
    #[serde(default)]
    data: Vec<Tweet>,
}

#[derive(Deserialize)]
struct Tweet {
    text: String,
}

impl TwitterAdapter {
    pub fn new(config: &TwitterConfig) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("Bearer {}", config.bearer_token))?,
        );
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static("appsentiment/0.1"),
        );

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: "https://api.twitter.com".to_string(),
        })
    }
}

#[async_trait]
impl SourceAdapter for TwitterAdapter {
    fn platform(&self) -> &str {
        "Twitter"
    }

    fn build_query(&self, app: &str) -> String {
        // Exact phrase, no reshared posts, English only.
        format!("\"{}\" -is:retweet lang:en", app)
    }

    async fn fetch(&self, query: &str, limit: u32) -> Result<Vec<String>> {
        let max_results = limit.clamp(MIN_PAGE_SIZE, MAX_PAGE_SIZE);
        let url = format!("{}/2/tweets/search/recent", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("query", query.to_string()),
                ("max_results", max_results.to_string()),
                ("tweet.fields", "text".to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::TwitterApi(format!(
                "Search failed for {}: {} - {}",
                query, status, body
            )));
        }

        let body: SearchResponse = response.json().await?;
        let mut texts: Vec<String> = body.data.into_iter().map(|t| t.text).collect();
        texts.truncate(limit as usize);

        Ok(texts)
    }
}
