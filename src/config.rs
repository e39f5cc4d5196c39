use crate::error::{Error, Result};
use std::env;

/// Per-platform credentials, injected into adapter constructors so tests can
/// supply fakes instead of reading process-wide state.
#[derive(Debug, Clone)]
pub struct TwitterConfig {
    pub bearer_token: String,
}

#[derive(Debug, Clone)]
pub struct RedditConfig {
    pub client_id: String,
    pub client_secret: String,
    pub user_agent: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub twitter: TwitterConfig,
    pub reddit: RedditConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let bearer_token = env::var("TWITTER_BEARER_TOKEN").map_err(|_| {
            Error::Config("TWITTER_BEARER_TOKEN environment variable not set".to_string())
        })?;

        let client_id = env::var("REDDIT_CLIENT_ID").map_err(|_| {
            Error::Config("REDDIT_CLIENT_ID environment variable not set".to_string())
        })?;

        let client_secret = env::var("REDDIT_CLIENT_SECRET").map_err(|_| {
            Error::Config("REDDIT_CLIENT_SECRET environment variable not set".to_string())
        })?;

        let user_agent = env::var("REDDIT_USER_AGENT")
            .unwrap_or_else(|_| "appsentiment/0.1 (sentiment collector)".to_string());

        Ok(Self {
            twitter: TwitterConfig { bearer_token },
            reddit: RedditConfig {
                client_id,
                client_secret,
                user_agent,
            },
        })
    }
}
