pub mod reddit;
pub mod twitter;

pub use reddit::RedditAdapter;
pub use twitter::TwitterAdapter;

use async_trait::async_trait;

use crate::error::Result;

/// One social platform's comment source.
///
/// `fetch` returns an explicit error rather than swallowing failures, so the
/// orchestrator decides how to surface them; a failed fetch degrades to zero
/// comments for that (app, platform) pair, never to an aborted run.
#[async_trait]
pub trait SourceAdapter: Send + Sync {
    /// Canonical platform name used in records and summaries.
    fn platform(&self) -> &str;

    /// Platform-specific query string for an app name.
    fn build_query(&self, app: &str) -> String;

    /// Up to `limit` raw comment texts matching `query`, in fetch order.
    async fn fetch(&self, query: &str, limit: u32) -> Result<Vec<String>>;
}
