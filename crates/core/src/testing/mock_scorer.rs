//! Deterministic scorers and models for testing.

use std::collections::HashMap;

use crate::sentiment::{CompoundModel, PolarityModel, ScoringError, Sentiment, SentimentScorer};

/// Scorer that looks up the cleaned text in a table.
///
/// Texts not in the table get the default sentiment. Texts registered with
/// [`StubScorer::failing_on`] produce a [`ScoringError::ModelFailed`].
#[derive(Debug, Clone)]
pub struct StubScorer {
    default: Sentiment,
    table: HashMap<String, Sentiment>,
    failing: Vec<String>,
}

impl StubScorer {
    pub fn new(default: Sentiment) -> Self {
        Self {
            default,
            table: HashMap::new(),
            failing: Vec::new(),
        }
    }

    /// Classify `text` as `sentiment`.
    pub fn with(mut self, text: impl Into<String>, sentiment: Sentiment) -> Self {
        self.table.insert(text.into(), sentiment);
        self
    }

    /// Fail when asked to classify `text`.
    pub fn failing_on(mut self, text: impl Into<String>) -> Self {
        self.failing.push(text.into());
        self
    }
}

impl SentimentScorer for StubScorer {
    fn name(&self) -> &str {
        "stub"
    }

    fn score(&self, text: &str) -> Result<Sentiment, ScoringError> {
        if self.failing.iter().any(|t| t == text) {
            return Err(ScoringError::ModelFailed(format!("stub refused '{}'", text)));
        }
        Ok(self.table.get(text).copied().unwrap_or(self.default))
    }
}

/// Polarity model returning the same value for every text.
#[derive(Debug, Clone, Copy)]
pub struct FixedPolarity(pub f64);

impl PolarityModel for FixedPolarity {
    fn polarity(&self, _text: &str) -> f64 {
        self.0
    }
}

/// Compound model returning the same value for every text.
#[derive(Debug, Clone, Copy)]
pub struct FixedCompound(pub f64);

impl CompoundModel for FixedCompound {
    fn compound(&self, _text: &str) -> f64 {
        self.0
    }
}
