//! Common test utilities for in-process API testing.
//!
//! The fixture builds the real router over a real pipeline, with the feed
//! boundary replaced by mocks.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use moodcast_core::{
    testing::{MockFeedSource, MockPublisher},
    Config, FeedConfig, Pipeline,
};
use moodcast_server::{api::create_router, state::AppState};

/// Re-export fixtures for test convenience
pub use moodcast_core::testing::fixtures;

/// Test fixture with an in-process router.
///
/// # Example
///
/// ```rust,ignore
/// let fixture = TestFixture::new();
/// fixture.source.set_posts(fixtures::mixed_batch()).await;
///
/// let response = fixture.post("/api/v1/runs", json!({})).await;
/// assert_eq!(response.status, StatusCode::OK);
/// ```
pub struct TestFixture {
    pub router: Router,
    /// Mock feed source - configure the fetched batch
    pub source: Arc<MockFeedSource>,
    /// Mock publisher - inspect published messages
    pub publisher: Arc<MockPublisher>,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestFixture {
    /// Fixture with a configured feed.
    pub fn new() -> Self {
        Self::build(test_config(true), true)
    }

    /// Fixture without any feed; runs are unavailable.
    pub fn without_feed() -> Self {
        Self::build(test_config(false), false)
    }

    /// Fixture over a custom config, with the mock feed attached.
    pub fn with_config(config: Config) -> Self {
        Self::build(config, true)
    }

    fn build(config: Config, with_feed: bool) -> Self {
        let source = Arc::new(MockFeedSource::new());
        let publisher = Arc::new(MockPublisher::new());

        let pipeline = Arc::new(Pipeline::from_config(&config));
        let mut state = AppState::new(config, pipeline);
        if with_feed {
            state = state.with_feed(source.clone(), publisher.clone());
        }

        Self {
            router: create_router(Arc::new(state)),
            source,
            publisher,
        }
    }

    /// Send a GET request to the test server.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request("GET", path, None).await
    }

    /// Send a POST request with JSON body.
    pub async fn post(&self, path: &str, body: Value) -> TestResponse {
        self.request("POST", path, Some(body)).await
    }

    /// Send a POST request with raw string body (for testing malformed JSON).
    pub async fn post_raw(&self, path: &str, body: &str) -> TestResponse {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    /// Send a GET request and return the raw text body.
    pub async fn get_text(&self, path: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();
        (status, String::from_utf8_lossy(&bytes).into_owned())
    }

    async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let mut request_builder = Request::builder().method(method).uri(path);

        let body = if let Some(json_body) = body {
            request_builder = request_builder.header("Content-Type", "application/json");
            Body::from(serde_json::to_vec(&json_body).unwrap())
        } else {
            Body::empty()
        };

        self.send(request_builder.body(body).unwrap()).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        let body: Value = if body_bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body }
    }
}

/// Default config, optionally with a feed section.
pub fn test_config(with_feed: bool) -> Config {
    Config {
        feed: with_feed.then(|| FeedConfig {
            user_id: "config-user".to_string(),
            count: 10,
            ..fixtures::feed_config("http://feed.invalid")
        }),
        ..Config::default()
    }
}

/// Helper to assert a response has expected status.
#[macro_export]
macro_rules! assert_status {
    ($response:expr, $status:expr) => {
        assert_eq!(
            $response.status, $status,
            "Expected status {:?}, got {:?}. Body: {}",
            $status,
            $response.status,
            serde_json::to_string_pretty(&$response.body).unwrap_or_default()
        );
    };
}
