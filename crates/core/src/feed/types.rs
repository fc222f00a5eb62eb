use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What to fetch from a feed source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedQuery {
    /// Account whose recent posts are requested.
    pub user_id: String,
    /// Maximum number of posts to return.
    pub count: u32,
}

impl FeedQuery {
    pub fn new(user_id: impl Into<String>, count: u32) -> Self {
        Self {
            user_id: user_id.into(),
            count,
        }
    }
}

/// Confirmation that a status message was published.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishReceipt {
    /// Identifier assigned by the feed service, if it returned one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Publisher that handled the message.
    pub publisher: String,
    pub published_at: DateTime<Utc>,
}

impl PublishReceipt {
    pub fn new(publisher: impl Into<String>, id: Option<String>) -> Self {
        Self {
            id,
            publisher: publisher.into(),
            published_at: Utc::now(),
        }
    }
}
