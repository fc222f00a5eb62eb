//! Traits for sentiment scoring components.

use thiserror::Error;

use super::types::Sentiment;

/// Errors that can occur while scoring a post.
#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("Scorer {scorer} could not classify value {value}")]
    Unclassifiable { scorer: String, value: f64 },

    #[error("Sentiment model failed: {0}")]
    ModelFailed(String),
}

/// Classifies cleaned post text into a sentiment category.
///
/// Implementations must be pure per call: the same text always yields the
/// same category, and scoring one post never affects another.
pub trait SentimentScorer: Send + Sync {
    /// Name of this scorer for logging and reports.
    fn name(&self) -> &str;

    /// Score cleaned text.
    fn score(&self, cleaned_text: &str) -> Result<Sentiment, ScoringError>;
}

/// A model producing a continuous polarity whose sign carries the valence.
pub trait PolarityModel: Send + Sync {
    fn polarity(&self, text: &str) -> f64;
}

/// A model producing a normalized compound score in [-1, 1].
pub trait CompoundModel: Send + Sync {
    fn compound(&self, text: &str) -> f64;
}
