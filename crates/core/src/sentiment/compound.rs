//! Compound strategy: fixed thresholds over a normalized score.

use super::traits::{CompoundModel, ScoringError, SentimentScorer};
use super::types::Sentiment;
use crate::config::CompoundThresholds;

/// Map a compound score to a category.
///
/// The three branches cover every real number; `None` is returned only for NaN.
pub fn classify_compound(compound: f64, thresholds: &CompoundThresholds) -> Option<Sentiment> {
    if compound >= thresholds.positive {
        Some(Sentiment::Positive)
    } else if compound <= thresholds.negative {
        Some(Sentiment::Negative)
    } else if compound > thresholds.negative && compound < thresholds.positive {
        Some(Sentiment::Neutral)
    } else {
        None
    }
}

/// Scorer that classifies a compound score against thresholds.
pub struct CompoundScorer<M: CompoundModel> {
    model: M,
    thresholds: CompoundThresholds,
}

impl<M: CompoundModel> CompoundScorer<M> {
    /// Create a scorer with the default 0.05 / -0.05 thresholds.
    pub fn new(model: M) -> Self {
        Self::with_thresholds(model, CompoundThresholds::default())
    }

    pub fn with_thresholds(model: M, thresholds: CompoundThresholds) -> Self {
        Self { model, thresholds }
    }

    pub fn thresholds(&self) -> &CompoundThresholds {
        &self.thresholds
    }
}

impl<M: CompoundModel> SentimentScorer for CompoundScorer<M> {
    fn name(&self) -> &str {
        "compound"
    }

    fn score(&self, cleaned_text: &str) -> Result<Sentiment, ScoringError> {
        let compound = self.model.compound(cleaned_text);
        classify_compound(compound, &self.thresholds).ok_or_else(|| {
            ScoringError::Unclassifiable {
                scorer: self.name().to_string(),
                value: compound,
            }
        })
    }
}
