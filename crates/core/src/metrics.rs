//! Prometheus metrics for core components.
//!
//! This module provides metrics for:
//! - Pipeline runs and their results
//! - Classified posts and dropped reshares
//! - Feed service requests (fetch, publish, credential checks)

use once_cell::sync::Lazy;
use prometheus::{HistogramOpts, HistogramVec, IntCounter, IntCounterVec, Opts};

// =============================================================================
// Pipeline Metrics
// =============================================================================

/// Pipeline runs total by result.
pub static PIPELINE_RUNS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("moodcast_pipeline_runs_total", "Total pipeline runs"),
        &["result"], // "ok", "empty_batch", "scoring_failed"
    )
    .unwrap()
});

/// Posts counted toward an aggregate, by sentiment.
pub static POSTS_CLASSIFIED: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "moodcast_posts_classified_total",
            "Posts counted toward an aggregate",
        ),
        &["sentiment"],
    )
    .unwrap()
});

/// Reshared posts dropped as duplicates.
pub static RESHARES_DROPPED: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "moodcast_reshares_dropped_total",
        "Reshared posts dropped as duplicates",
    )
    .unwrap()
});

// =============================================================================
// Feed Service Metrics
// =============================================================================

/// Feed service request duration in seconds.
pub static FEED_REQUEST_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "moodcast_feed_request_duration_seconds",
            "Duration of feed service requests",
        )
        .buckets(vec![0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0]),
        &["operation"], // "verify", "fetch", "publish"
    )
    .unwrap()
});

/// Feed service requests by operation and result.
pub static FEED_REQUESTS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("moodcast_feed_requests_total", "Feed service requests"),
        &["operation", "result"], // result: "ok", "auth_failure", "error"
    )
    .unwrap()
});

// =============================================================================
// Helper functions
// =============================================================================

/// Get all core metrics for registration in a registry.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        // Pipeline
        Box::new(PIPELINE_RUNS.clone()),
        Box::new(POSTS_CLASSIFIED.clone()),
        Box::new(RESHARES_DROPPED.clone()),
        // Feed service
        Box::new(FEED_REQUEST_DURATION.clone()),
        Box::new(FEED_REQUESTS.clone()),
    ]
}
