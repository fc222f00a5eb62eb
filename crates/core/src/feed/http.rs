//! HTTP feed service client.
//!
//! Talks to a JSON feed API using a bearer token:
//! - `GET  {base}/account/verify_credentials`
//! - `GET  {base}/users/{user_id}/posts?count=N`
//! - `POST {base}/statuses` with `{"status": "..."}`

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::traits::{FeedError, FeedSource, StatusPublisher};
use super::types::{FeedQuery, PublishReceipt};
use crate::config::FeedConfig;
use crate::metrics::{FEED_REQUESTS, FEED_REQUEST_DURATION};
use crate::pipeline::RawPost;

#[derive(Debug, Serialize)]
struct StatusRequest<'a> {
    status: &'a str,
}

#[derive(Debug, Deserialize)]
struct StatusResponse {
    #[serde(default)]
    id: Option<serde_json::Value>,
}

/// Feed API client used both as source and publisher.
pub struct HttpFeedClient {
    client: Client,
    base_url: String,
    access_token: String,
}

impl HttpFeedClient {
    /// Create a new client.
    pub fn new(config: &FeedConfig) -> Result<Self, FeedError> {
        if config.access_token.is_empty() {
            return Err(FeedError::AuthFailure(
                "feed access token is not configured".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs as u64))
            .build()
            .map_err(|e| FeedError::FetchFailure(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            access_token: config.access_token.clone(),
        })
    }

    /// Check that the access token is accepted by the service.
    pub async fn verify_credentials(&self) -> Result<(), FeedError> {
        let start = Instant::now();
        let result = self.verify_credentials_inner().await;
        record("verify", start, &result);
        result
    }

    async fn verify_credentials_inner(&self) -> Result<(), FeedError> {
        let url = format!("{}/account/verify_credentials", self.base_url);
        debug!("Verifying feed credentials at {}", url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.access_token)
            .send()
            .await
            .map_err(|e| FeedError::AuthFailure(format!("Credential check failed: {}", e)))?;

        let status = response.status();
        if let Some(err) = auth_error(status) {
            return Err(err);
        }
        if !status.is_success() {
            return Err(FeedError::AuthFailure(format!(
                "Credential check returned {}",
                status
            )));
        }
        Ok(())
    }

    async fn fetch_inner(&self, query: &FeedQuery) -> Result<Vec<RawPost>, FeedError> {
        let url = format!(
            "{}/users/{}/posts",
            self.base_url,
            urlencoding::encode(&query.user_id)
        );
        debug!("Fetching posts: user='{}', count={}", query.user_id, query.count);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.access_token)
            .query(&[("count", query.count.to_string())])
            .send()
            .await
            .map_err(|e| FeedError::FetchFailure(e.to_string()))?;

        let status = response.status();
        if let Some(err) = auth_error(status) {
            return Err(err);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FeedError::FetchFailure(format!("{} - {}", status, body)));
        }

        let mut posts: Vec<RawPost> = response.json().await.map_err(|e| {
            FeedError::FetchFailure(format!("Failed to parse posts response: {}", e))
        })?;
        posts.truncate(query.count as usize);
        Ok(posts)
    }

    async fn publish_inner(&self, message: &str) -> Result<PublishReceipt, FeedError> {
        let url = format!("{}/statuses", self.base_url);
        debug!("Publishing status ({} chars)", message.chars().count());

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.access_token)
            .json(&StatusRequest { status: message })
            .send()
            .await
            .map_err(|e| FeedError::PublishFailure(e.to_string()))?;

        let status = response.status();
        if let Some(err) = auth_error(status) {
            return Err(err);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FeedError::PublishFailure(format!("{} - {}", status, body)));
        }

        // A missing or unparsable body still means the status was accepted.
        let id = response
            .json::<StatusResponse>()
            .await
            .ok()
            .and_then(|r| r.id)
            .map(|id| match id {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            });

        Ok(PublishReceipt::new(StatusPublisher::name(self), id))
    }
}

fn auth_error(status: StatusCode) -> Option<FeedError> {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Some(FeedError::AuthFailure(format!(
            "Feed service rejected credentials ({})",
            status
        ))),
        _ => None,
    }
}

fn record<T>(operation: &str, start: Instant, result: &Result<T, FeedError>) {
    let outcome = match result {
        Ok(_) => "ok",
        Err(FeedError::AuthFailure(_)) => "auth_failure",
        Err(_) => "error",
    };
    FEED_REQUEST_DURATION
        .with_label_values(&[operation])
        .observe(start.elapsed().as_secs_f64());
    FEED_REQUESTS
        .with_label_values(&[operation, outcome])
        .inc();
}

#[async_trait]
impl FeedSource for HttpFeedClient {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch(&self, query: &FeedQuery) -> Result<Vec<RawPost>, FeedError> {
        let start = Instant::now();
        let result = self.fetch_inner(query).await;
        record("fetch", start, &result);
        result
    }
}

#[async_trait]
impl StatusPublisher for HttpFeedClient {
    fn name(&self) -> &str {
        "http"
    }

    async fn publish(&self, message: &str) -> Result<PublishReceipt, FeedError> {
        let start = Instant::now();
        let result = self.publish_inner(message).await;
        record("publish", start, &result);
        result
    }
}
