use async_trait::async_trait;
use thiserror::Error;

use super::types::{FeedQuery, PublishReceipt};
use crate::pipeline::RawPost;

/// Failures of the feed service, distinguished by cause.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Authentication failed: {0}")]
    AuthFailure(String),

    #[error("Fetch failed: {0}")]
    FetchFailure(String),

    #[error("Publish failed: {0}")]
    PublishFailure(String),
}

impl FeedError {
    /// Short label for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            FeedError::AuthFailure(_) => "auth_failure",
            FeedError::FetchFailure(_) => "fetch_failure",
            FeedError::PublishFailure(_) => "publish_failure",
        }
    }
}

/// Source of recent posts for an account.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Name of this source for logging.
    fn name(&self) -> &str;

    /// Fetch up to `query.count` recent posts, newest first.
    async fn fetch(&self, query: &FeedQuery) -> Result<Vec<RawPost>, FeedError>;
}

/// Destination for the composed status message.
#[async_trait]
pub trait StatusPublisher: Send + Sync {
    /// Name of this publisher for logging.
    fn name(&self) -> &str;

    /// Publish a single status message.
    async fn publish(&self, message: &str) -> Result<PublishReceipt, FeedError>;
}
