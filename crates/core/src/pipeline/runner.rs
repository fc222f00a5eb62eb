//! Pipeline runner: clean, score, deduplicate, aggregate, decide.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::cleaner::TextCleaner;
use crate::config::Config;
use crate::metrics;
use crate::sentiment::{create_scorer, ScoringError, SentimentScorer};

use super::aggregate::{aggregate, AggregateResult};
use super::decision::{DecisionEngine, DecisionOutcome};
use super::dedup::deduplicate_posts;
use super::post::{Post, RawPost};

/// Error type for pipeline runs.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Nothing left to aggregate.
    #[error("No posts to analyze")]
    EmptyBatch,

    /// A post could not be classified.
    #[error("Scoring failed: {0}")]
    Scoring(#[from] ScoringError),
}

/// Everything one run produced.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineReport {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    /// Name of the scorer used for every post in this run.
    pub scorer: String,
    /// Posts received before deduplication.
    pub fetched: usize,
    /// Posts that counted toward the aggregate, in input order.
    pub retained: Vec<Post>,
    pub dropped_reshares: usize,
    pub aggregate: AggregateResult,
    pub outcome: DecisionOutcome,
}

/// The classification pipeline.
///
/// Holds no per-run state; a single instance can serve any number of runs.
pub struct Pipeline {
    cleaner: TextCleaner,
    scorer: Box<dyn SentimentScorer>,
    engine: DecisionEngine,
}

impl Pipeline {
    pub fn new(scorer: Box<dyn SentimentScorer>, engine: DecisionEngine) -> Self {
        Self {
            cleaner: TextCleaner::new(),
            scorer,
            engine,
        }
    }

    /// Build the pipeline described by the configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            create_scorer(&config.scorer),
            DecisionEngine::from_config(&config.decision),
        )
    }

    pub fn scorer_name(&self) -> &str {
        self.scorer.name()
    }

    /// Run the pipeline over one batch.
    pub fn run(&self, batch: Vec<RawPost>) -> Result<PipelineReport, PipelineError> {
        let run_id = Uuid::new_v4();
        let fetched = batch.len();
        debug!(%run_id, fetched, scorer = self.scorer.name(), "Pipeline run started");

        let result = self.run_stages(run_id, batch);
        match &result {
            Ok(report) => {
                metrics::PIPELINE_RUNS.with_label_values(&["ok"]).inc();
                metrics::RESHARES_DROPPED.inc_by(report.dropped_reshares as u64);
                for post in &report.retained {
                    metrics::POSTS_CLASSIFIED
                        .with_label_values(&[post.sentiment.as_str()])
                        .inc();
                }
                info!(
                    %run_id,
                    fetched,
                    retained = report.retained.len(),
                    dropped = report.dropped_reshares,
                    mood = %report.outcome.dominant_mood,
                    "Pipeline run completed"
                );
            }
            Err(PipelineError::EmptyBatch) => {
                metrics::PIPELINE_RUNS.with_label_values(&["empty_batch"]).inc();
                info!(%run_id, "Pipeline run had no posts to analyze");
            }
            Err(e) => {
                metrics::PIPELINE_RUNS.with_label_values(&["scoring_failed"]).inc();
                warn!(%run_id, error = %e, "Pipeline run failed");
            }
        }

        result
    }

    fn run_stages(
        &self,
        run_id: Uuid,
        batch: Vec<RawPost>,
    ) -> Result<PipelineReport, PipelineError> {
        let fetched = batch.len();

        // Sequential scoring keeps input order for the dedup stage.
        let scored = batch
            .into_iter()
            .map(|raw| self.cleaner.clean_post(raw).score(self.scorer.as_ref()))
            .collect::<Result<Vec<Post>, ScoringError>>()?;

        let dedup = deduplicate_posts(scored);
        debug!(
            retained = dedup.retained.len(),
            dropped = dedup.dropped,
            "Deduplicated reshared posts"
        );

        let aggregate = aggregate(&dedup.retained)?;
        let outcome = self.engine.decide(&aggregate);

        Ok(PipelineReport {
            run_id,
            generated_at: Utc::now(),
            scorer: self.scorer.name().to_string(),
            fetched,
            retained: dedup.retained,
            dropped_reshares: dedup.dropped,
            aggregate,
            outcome,
        })
    }
}
