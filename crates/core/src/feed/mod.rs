//! Feed service boundary.
//!
//! The pipeline only sees [`RawPost`](crate::pipeline::RawPost) batches and a
//! message string. Everything else about the feed service lives behind the
//! [`FeedSource`] and [`StatusPublisher`] traits:
//!
//! - [`HttpFeedClient`] - the real service, over HTTP with a bearer token
//! - [`JsonFileFeed`] - a batch read from a local file
//! - [`DryRunPublisher`] - logs instead of publishing

mod http;
mod offline;
mod traits;
mod types;

pub use http::HttpFeedClient;
pub use offline::{DryRunPublisher, JsonFileFeed};
pub use traits::{FeedError, FeedSource, StatusPublisher};
pub use types::{FeedQuery, PublishReceipt};
