//! Mock feed source and publisher for testing.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::feed::{FeedError, FeedQuery, FeedSource, PublishReceipt, StatusPublisher};
use crate::pipeline::RawPost;

/// Mock implementation of the FeedSource trait.
///
/// Returns the configured posts (truncated to the query count) and records
/// every query for assertions.
///
/// # Example
///
/// ```rust,ignore
/// use moodcast_core::testing::{MockFeedSource, fixtures};
///
/// let source = MockFeedSource::new();
/// source.set_posts(fixtures::mixed_batch()).await;
///
/// let posts = source.fetch(&FeedQuery::new("alice", 10)).await?;
/// assert_eq!(source.recorded_queries().await.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MockFeedSource {
    posts: Arc<RwLock<Vec<RawPost>>>,
    queries: Arc<RwLock<Vec<FeedQuery>>>,
    /// If set, the next fetch will fail with this error.
    next_error: Arc<RwLock<Option<FeedError>>>,
}

impl MockFeedSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock source with predefined posts.
    pub fn with_posts(posts: Vec<RawPost>) -> Self {
        Self {
            posts: Arc::new(RwLock::new(posts)),
            ..Self::default()
        }
    }

    pub async fn set_posts(&self, posts: Vec<RawPost>) {
        *self.posts.write().await = posts;
    }

    /// Make the next fetch fail.
    pub async fn set_next_error(&self, error: FeedError) {
        *self.next_error.write().await = Some(error);
    }

    pub async fn recorded_queries(&self) -> Vec<FeedQuery> {
        self.queries.read().await.clone()
    }
}

#[async_trait]
impl FeedSource for MockFeedSource {
    fn name(&self) -> &str {
        "mock"
    }

    async fn fetch(&self, query: &FeedQuery) -> Result<Vec<RawPost>, FeedError> {
        self.queries.write().await.push(query.clone());

        if let Some(error) = self.next_error.write().await.take() {
            return Err(error);
        }

        let posts = self.posts.read().await;
        Ok(posts.iter().take(query.count as usize).cloned().collect())
    }
}

/// Mock implementation of the StatusPublisher trait.
///
/// Records every published message instead of sending it anywhere.
#[derive(Debug, Default)]
pub struct MockPublisher {
    published: Arc<RwLock<Vec<String>>>,
    /// If set, the next publish will fail with this error.
    next_error: Arc<RwLock<Option<FeedError>>>,
}

impl MockPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next publish fail.
    pub async fn set_next_error(&self, error: FeedError) {
        *self.next_error.write().await = Some(error);
    }

    /// Messages published so far, oldest first.
    pub async fn published(&self) -> Vec<String> {
        self.published.read().await.clone()
    }
}

#[async_trait]
impl StatusPublisher for MockPublisher {
    fn name(&self) -> &str {
        "mock"
    }

    async fn publish(&self, message: &str) -> Result<PublishReceipt, FeedError> {
        if let Some(error) = self.next_error.write().await.take() {
            return Err(error);
        }

        let mut published = self.published.write().await;
        published.push(message.to_string());
        Ok(PublishReceipt::new(
            self.name(),
            Some(format!("mock-{}", published.len())),
        ))
    }
}
