use async_trait::async_trait;
use reqwest::{header, Client};
use serde::Deserialize;
use serde_json::Value;

use crate::config::RedditConfig;
use crate::error::{Error, Result};
use crate::sources::SourceAdapter;

// /api/morechildren takes at most 100 comment ids per call.
const MORECHILDREN_BATCH: usize = 100;

/// Threaded-discussion source: searches r/all for submissions, then walks
/// each submission's comment tree, expanding every truncated branch.
pub struct RedditAdapter {
    client: Client,
    config: RedditConfig,
    base_url: String,
    auth_url: String,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

impl RedditAdapter {
    pub fn new(config: &RedditConfig) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_str(&config.user_agent)?,
        );

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            config: config.clone(),
            base_url: "https://oauth.reddit.com".to_string(),
            auth_url: "https://www.reddit.com/api/v1/access_token".to_string(),
        })
    }

    /// Application-only OAuth: client credentials for a script app.
    async fn access_token(&self) -> Result<String> {
        let response = self
            .client
            .post(&self.auth_url)
            .basic_auth(&self.config.client_id, Some(&self.config.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::RedditApi(format!(
                "Authentication failed: {} - {}",
                status, body
            )));
        }

        let token: TokenResponse = response.json().await?;
        Ok(token.access_token)
    }

    /// Submission ids matching `query` across all subreddits, newest-ranked
    /// first as the API returns them.
    async fn search_submissions(
        &self,
        token: &str,
        query: &str,
        limit: u32,
    ) -> Result<Vec<String>> {
        let url = format!("{}/r/all/search", self.base_url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .query(&[
                ("q", query.to_string()),
                ("limit", limit.to_string()),
                ("raw_json", "1".to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::RedditApi(format!(
                "Search failed for {}: {} - {}",
                query, status, body
            )));
        }

        let listing: Value = response.json().await?;
        let ids = listing["data"]["children"]
            .as_array()
            .map(|children| {
                children
                    .iter()
                    .filter(|c| c["kind"] == "t3")
                    .filter_map(|c| c["data"]["id"].as_str().map(String::from))
                    .collect()
            })
            .unwrap_or_default();

        Ok(ids)
    }

    /// All comment bodies under one submission, depth-first, with every
    /// `more` placeholder expanded via /api/morechildren.
    async fn collect_link_comments(&self, token: &str, link_id: &str) -> Result<Vec<String>> {
        let url = format!("{}/comments/{}", self.base_url, link_id);

        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .query(&[("limit", "500".to_string()), ("raw_json", "1".to_string())])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(Error::RedditApi(format!(
                "Comment fetch failed for {}: {}",
                link_id, status
            )));
        }

        // The endpoint returns [submission listing, comment listing].
        let payload: Value = response.json().await?;
        let comment_listing = payload
            .get(1)
            .ok_or_else(|| Error::ParseError(format!("No comment listing for {}", link_id)))?;

        let mut bodies = Vec::new();
        let mut more_ids = Vec::new();
        flatten_comment_tree(comment_listing, &mut bodies, &mut more_ids);

        // Expansion can itself surface further `more` nodes; keep going
        // until the frontier is empty.
        while !more_ids.is_empty() {
            let batch: Vec<String> = more_ids
                .drain(..more_ids.len().min(MORECHILDREN_BATCH))
                .collect();
            let things = self.fetch_more_children(token, link_id, &batch).await?;
            for thing in &things {
                flatten_comment_tree(thing, &mut bodies, &mut more_ids);
            }
        }

        Ok(bodies)
    }

    async fn fetch_more_children(
        &self,
        token: &str,
        link_id: &str,
        children: &[String],
    ) -> Result<Vec<Value>> {
        let url = format!("{}/api/morechildren", self.base_url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .query(&[
                ("api_type", "json".to_string()),
                ("link_id", format!("t3_{}", link_id)),
                ("children", children.join(",")),
                ("raw_json", "1".to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(Error::RedditApi(format!(
                "morechildren failed for {}: {}",
                link_id, status
            )));
        }

        let payload: Value = response.json().await?;
        let things = payload["json"]["data"]["things"]
            .as_array()
            .cloned()
            .unwrap_or_default();

        Ok(things)
    }
}

/// Depth-first walk of a comment tree node. Comment bodies land in `bodies`
/// in traversal order; ids from truncated `more` nodes land in `more_ids`.
fn flatten_comment_tree(node: &Value, bodies: &mut Vec<String>, more_ids: &mut Vec<String>) {
    match node["kind"].as_str() {
        Some("Listing") => {
            if let Some(children) = node["data"]["children"].as_array() {
                for child in children {
                    flatten_comment_tree(child, bodies, more_ids);
                }
            }
        }
        Some("t1") => {
            if let Some(body) = node["data"]["body"].as_str() {
                bodies.push(body.to_string());
            }
            // `replies` is an empty string on leaf comments.
            let replies = &node["data"]["replies"];
            if replies.is_object() {
                flatten_comment_tree(replies, bodies, more_ids);
            }
        }
        Some("more") => {
            if let Some(children) = node["data"]["children"].as_array() {
                more_ids.extend(children.iter().filter_map(|c| c.as_str().map(String::from)));
            }
        }
        _ => {}
    }
}

#[async_trait]
impl SourceAdapter for RedditAdapter {
    fn platform(&self) -> &str {
        "Reddit"
    }

    fn build_query(&self, app: &str) -> String {
        app.to_string()
    }

    async fn fetch(&self, query: &str, limit: u32) -> Result<Vec<String>> {
        let token = self.access_token().await?;
        let submissions = self.search_submissions(&token, query, limit).await?;

        let mut bodies = Vec::new();
        for link_id in &submissions {
            if bodies.len() >= limit as usize {
                break;
            }
            let mut comments = self.collect_link_comments(&token, link_id).await?;
            bodies.append(&mut comments);
        }

        bodies.truncate(limit as usize);
        Ok(bodies)
    }
}
