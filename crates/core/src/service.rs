//! One complete run: fetch a batch, run the pipeline, publish the message.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::feed::{FeedError, FeedQuery, FeedSource, PublishReceipt, StatusPublisher};
use crate::pipeline::{Pipeline, PipelineError, PipelineReport};

/// Errors that end a run without a result.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Feed(#[from] FeedError),

    #[error(transparent)]
    Pipeline(PipelineError),
}

/// How a run ended.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RunOutcome {
    /// The message was published.
    Published {
        report: PipelineReport,
        receipt: PublishReceipt,
    },
    /// The message was composed but publishing was skipped.
    DryRun { report: PipelineReport },
    /// No posts survived to be aggregated; nothing was published.
    NoData { fetched: usize },
}

impl RunOutcome {
    pub fn report(&self) -> Option<&PipelineReport> {
        match self {
            RunOutcome::Published { report, .. } | RunOutcome::DryRun { report } => Some(report),
            RunOutcome::NoData { .. } => None,
        }
    }
}

/// Drives the pipeline between a feed source and a publisher.
pub struct MoodService {
    pipeline: Arc<Pipeline>,
    source: Arc<dyn FeedSource>,
    publisher: Arc<dyn StatusPublisher>,
    dry_run: bool,
}

impl MoodService {
    pub fn new(
        pipeline: Arc<Pipeline>,
        source: Arc<dyn FeedSource>,
        publisher: Arc<dyn StatusPublisher>,
    ) -> Self {
        Self {
            pipeline,
            source,
            publisher,
            dry_run: false,
        }
    }

    /// Compose the message but never publish it.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Run once for the given query. No retries.
    pub async fn run_once(&self, query: &FeedQuery) -> Result<RunOutcome, ServiceError> {
        info!(
            source = self.source.name(),
            user_id = %query.user_id,
            count = query.count,
            "Fetching posts"
        );
        let batch = self.source.fetch(query).await.map_err(|e| {
            warn!(kind = e.kind(), error = %e, "Fetch failed");
            e
        })?;
        let fetched = batch.len();

        let report = match self.pipeline.run(batch) {
            Ok(report) => report,
            Err(PipelineError::EmptyBatch) => {
                info!(fetched, "No data to analyze, nothing published");
                return Ok(RunOutcome::NoData { fetched });
            }
            Err(e) => return Err(ServiceError::Pipeline(e)),
        };

        if self.dry_run {
            info!(run_id = %report.run_id, "Dry run, skipping publish");
            return Ok(RunOutcome::DryRun { report });
        }

        let receipt = self
            .publisher
            .publish(&report.outcome.message)
            .await
            .map_err(|e| {
                warn!(run_id = %report.run_id, kind = e.kind(), error = %e, "Publish failed");
                e
            })?;

        info!(
            run_id = %report.run_id,
            publisher = %receipt.publisher,
            id = ?receipt.id,
            "Status published"
        );
        Ok(RunOutcome::Published { report, receipt })
    }
}
