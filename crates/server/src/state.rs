use std::sync::Arc;

use moodcast_core::{
    Config, FeedQuery, FeedSource, MoodService, Pipeline, SanitizedConfig, StatusPublisher,
};

/// Posts requested when neither the request nor the config sets a count.
const DEFAULT_RUN_COUNT: u32 = 25;

/// Feed source and publisher used by `POST /runs`.
#[derive(Clone)]
pub struct FeedHandle {
    pub source: Arc<dyn FeedSource>,
    pub publisher: Arc<dyn StatusPublisher>,
}

/// Shared application state
pub struct AppState {
    config: Config,
    pipeline: Arc<Pipeline>,
    feed: Option<FeedHandle>,
}

impl AppState {
    pub fn new(config: Config, pipeline: Arc<Pipeline>) -> Self {
        Self {
            config,
            pipeline,
            feed: None,
        }
    }

    pub fn with_feed(
        mut self,
        source: Arc<dyn FeedSource>,
        publisher: Arc<dyn StatusPublisher>,
    ) -> Self {
        self.feed = Some(FeedHandle { source, publisher });
        self
    }

    pub fn sanitized_config(&self) -> SanitizedConfig {
        SanitizedConfig::from(&self.config)
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// Build a service for one run, or `None` when no feed is configured.
    pub fn mood_service(&self, dry_run: bool) -> Option<MoodService> {
        let feed = self.feed.as_ref()?;
        Some(
            MoodService::new(
                Arc::clone(&self.pipeline),
                Arc::clone(&feed.source),
                Arc::clone(&feed.publisher),
            )
            .with_dry_run(dry_run),
        )
    }

    /// Query from the configured feed defaults, with optional overrides.
    pub fn feed_query(&self, user_id: Option<String>, count: Option<u32>) -> FeedQuery {
        let feed = self.config.feed.as_ref();
        FeedQuery::new(
            user_id
                .or_else(|| feed.map(|f| f.user_id.clone()))
                .unwrap_or_default(),
            count.or(feed.map(|f| f.count)).unwrap_or(DEFAULT_RUN_COUNT),
        )
    }
}
