//! Feed implementations that never touch the network.

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::info;

use super::traits::{FeedError, FeedSource, StatusPublisher};
use super::types::{FeedQuery, PublishReceipt};
use crate::pipeline::RawPost;

/// Reads a batch of posts from a JSON file.
///
/// The file holds an array of `{"text": ..., "reshare_count": ...}` objects
/// (`retweet_count` is accepted as an alias). The query's user id is ignored;
/// its count truncates the batch.
pub struct JsonFileFeed {
    path: PathBuf,
}

impl JsonFileFeed {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl FeedSource for JsonFileFeed {
    fn name(&self) -> &str {
        "json_file"
    }

    async fn fetch(&self, query: &FeedQuery) -> Result<Vec<RawPost>, FeedError> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            FeedError::FetchFailure(format!("Failed to read {}: {}", self.path.display(), e))
        })?;

        let mut posts: Vec<RawPost> = serde_json::from_str(&content).map_err(|e| {
            FeedError::FetchFailure(format!("Invalid posts file {}: {}", self.path.display(), e))
        })?;
        posts.truncate(query.count as usize);
        Ok(posts)
    }
}

/// Logs the message instead of publishing it.
#[derive(Debug, Default, Clone, Copy)]
pub struct DryRunPublisher;

#[async_trait]
impl StatusPublisher for DryRunPublisher {
    fn name(&self) -> &str {
        "dry_run"
    }

    async fn publish(&self, message: &str) -> Result<PublishReceipt, FeedError> {
        info!(message = %message, "Dry run, status not published");
        Ok(PublishReceipt::new(self.name(), None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_posts(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_reads_and_truncates() {
        let file = write_posts(
            r#"[
                {"text": "first", "reshare_count": 1},
                {"text": "second", "retweet_count": 2},
                {"text": "third"}
            ]"#,
        );
        let feed = JsonFileFeed::new(file.path());

        let all = feed.fetch(&FeedQuery::new("ignored", 10)).await.unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[1].reshare_count, 2);
        assert_eq!(all[2].reshare_count, 0);

        let two = feed.fetch(&FeedQuery::new("ignored", 2)).await.unwrap();
        assert_eq!(two.len(), 2);
        assert_eq!(two[0].text, "first");
    }

    #[tokio::test]
    async fn test_missing_file_is_fetch_failure() {
        let feed = JsonFileFeed::new("/nonexistent/posts.json");
        let result = feed.fetch(&FeedQuery::new("x", 5)).await;
        assert!(matches!(result, Err(FeedError::FetchFailure(_))));
    }

    #[tokio::test]
    async fn test_malformed_file_is_fetch_failure() {
        let file = write_posts("{not json");
        let feed = JsonFileFeed::new(file.path());
        let result = feed.fetch(&FeedQuery::new("x", 5)).await;
        assert!(matches!(result, Err(FeedError::FetchFailure(_))));
    }

    #[tokio::test]
    async fn test_dry_run_publisher() {
        let receipt = DryRunPublisher.publish("hello").await.unwrap();
        assert_eq!(receipt.publisher, "dry_run");
        assert!(receipt.id.is_none());
    }
}
