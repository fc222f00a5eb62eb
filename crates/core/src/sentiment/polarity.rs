//! Polarity strategy: the sign of the model's polarity decides the category.

use super::traits::{PolarityModel, ScoringError, SentimentScorer};
use super::types::Sentiment;

/// Map a polarity value to a category.
///
/// Returns `None` only for NaN, which compares false against everything.
pub fn classify_polarity(polarity: f64) -> Option<Sentiment> {
    if polarity > 0.0 {
        Some(Sentiment::Positive)
    } else if polarity == 0.0 {
        Some(Sentiment::Neutral)
    } else if polarity < 0.0 {
        Some(Sentiment::Negative)
    } else {
        None
    }
}

/// Scorer that classifies by polarity sign.
pub struct PolarityScorer<M: PolarityModel> {
    model: M,
}

impl<M: PolarityModel> PolarityScorer<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }
}

impl<M: PolarityModel> SentimentScorer for PolarityScorer<M> {
    fn name(&self) -> &str {
        "polarity"
    }

    fn score(&self, cleaned_text: &str) -> Result<Sentiment, ScoringError> {
        let polarity = self.model.polarity(cleaned_text);
        classify_polarity(polarity).ok_or_else(|| ScoringError::Unclassifiable {
            scorer: self.name().to_string(),
            value: polarity,
        })
    }
}
