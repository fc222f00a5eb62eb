//! Testing utilities and mock implementations.
//!
//! Mocks for the feed boundary and deterministic scorers, so a full run can
//! be exercised without a network or a real lexicon.
//!
//! # Example
//!
//! ```rust,ignore
//! use moodcast_core::testing::{fixtures, MockFeedSource, MockPublisher, StubScorer};
//!
//! let source = Arc::new(MockFeedSource::with_posts(fixtures::mixed_batch()));
//! let publisher = Arc::new(MockPublisher::new());
//!
//! let service = MoodService::new(pipeline, source, publisher.clone());
//! service.run_once(&FeedQuery::new("alice", 10)).await?;
//! assert_eq!(publisher.published().await.len(), 1);
//! ```

mod mock_feed;
mod mock_scorer;

pub use mock_feed::{MockFeedSource, MockPublisher};
pub use mock_scorer::{FixedCompound, FixedPolarity, StubScorer};

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::config::FeedConfig;
    use crate::pipeline::RawPost;

    /// Four posts covering every category, with one duplicate reshare.
    ///
    /// With the default compound scorer this yields one positive, one
    /// negative and one neutral post after the second "ok" is dropped.
    pub fn mixed_batch() -> Vec<RawPost> {
        vec![
            RawPost::new("RT @a: great day! #nice", 3),
            RawPost::new("I hate mondays", 0),
            RawPost::new("ok", 3),
            RawPost::new("ok", 3),
        ]
    }

    /// A batch where every post is clearly positive.
    pub fn positive_batch(len: usize) -> Vec<RawPost> {
        (0..len)
            .map(|i| RawPost::new(format!("what a great and happy day {}", i), 0))
            .collect()
    }

    /// A batch where every post is clearly negative.
    pub fn negative_batch(len: usize) -> Vec<RawPost> {
        (0..len)
            .map(|i| RawPost::new(format!("this is terrible and sad {}", i), 0))
            .collect()
    }

    /// Feed configuration pointing at `base_url`.
    pub fn feed_config(base_url: &str) -> FeedConfig {
        FeedConfig {
            base_url: base_url.to_string(),
            access_token: "test-token".to_string(),
            user_id: "test-user".to_string(),
            count: 25,
            timeout_secs: 5,
        }
    }
}
