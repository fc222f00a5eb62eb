//! Mapping aggregate ratios to a mood and a status message.

use serde::Serialize;
use std::fmt;

use crate::config::DecisionConfig;

use super::AggregateResult;

const NEGATIVE_PREFIX: &str = "I am being negative. Please send some positivity this way";
const POSITIVE_PREFIX: &str = "I am feeling uber positive!";
const MIXED_PREFIX: &str = "No man's land";

/// Mood of a batch as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Positive,
    Negative,
    Mixed,
}

impl Mood {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Positive => "positive",
            Mood::Negative => "negative",
            Mood::Mixed => "mixed",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Share of each category in a batch; the three values sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MoodRatios {
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
}

impl MoodRatios {
    /// Ratios from counts. Neutral is the remainder, not an independent count.
    pub fn from_aggregate(result: &AggregateResult) -> Self {
        let total = result.total() as f64;
        let positive = result.positive_count() as f64 / total;
        let negative = result.negative_count() as f64 / total;
        Self {
            positive,
            negative,
            // Rounding can leave a tiny negative remainder when nothing is neutral.
            neutral: (1.0 - positive - negative).max(0.0),
        }
    }

    /// The same ratios scaled to percentages.
    pub fn percentages(&self) -> MoodRatios {
        MoodRatios {
            positive: self.positive * 100.0,
            negative: self.negative * 100.0,
            neutral: self.neutral * 100.0,
        }
    }
}

/// Result of a decision.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecisionOutcome {
    /// Status message ready for publishing.
    pub message: String,
    pub dominant_mood: Mood,
    pub ratios: MoodRatios,
}

/// Threshold policy turning an aggregate into a mood.
#[derive(Debug, Clone, Copy)]
pub struct DecisionEngine {
    dominance_threshold: f64,
}

impl DecisionEngine {
    pub fn new(dominance_threshold: f64) -> Self {
        Self {
            dominance_threshold,
        }
    }

    pub fn from_config(config: &DecisionConfig) -> Self {
        Self::new(config.dominance_threshold)
    }

    pub fn dominance_threshold(&self) -> f64 {
        self.dominance_threshold
    }

    /// Decide the mood of a batch.
    ///
    /// Negative dominance is checked before positive dominance. The message
    /// always reports all three percentages.
    pub fn decide(&self, result: &AggregateResult) -> DecisionOutcome {
        let ratios = MoodRatios::from_aggregate(result);

        let (prefix, dominant_mood) = if ratios.negative >= self.dominance_threshold {
            (NEGATIVE_PREFIX, Mood::Negative)
        } else if ratios.positive >= self.dominance_threshold {
            (POSITIVE_PREFIX, Mood::Positive)
        } else {
            (MIXED_PREFIX, Mood::Mixed)
        };

        let pct = ratios.percentages();
        let message = format!(
            "{}\nPositive posts percentage: {:.2} %\nNegative posts percentage: {:.2} %\nNeutral posts percentage: {:.2} %",
            prefix, pct.positive, pct.negative, pct.neutral
        );

        DecisionOutcome {
            message,
            dominant_mood,
            ratios,
        }
    }
}

impl Default for DecisionEngine {
    fn default() -> Self {
        Self::from_config(&DecisionConfig::default())
    }
}
