//! Per-category tallies of a deduplicated batch.

use serde::Serialize;

use crate::sentiment::Sentiment;

use super::{PipelineError, Post};

/// Sentiment counts for one batch.
///
/// `total` always equals the sum of the three counts and is never zero;
/// the only constructors reject empty batches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AggregateResult {
    positive_count: usize,
    negative_count: usize,
    neutral_count: usize,
    total: usize,
}

impl AggregateResult {
    /// Build a result from explicit counts.
    pub fn from_counts(
        positive_count: usize,
        negative_count: usize,
        neutral_count: usize,
    ) -> Result<Self, PipelineError> {
        let total = positive_count + negative_count + neutral_count;
        if total == 0 {
            return Err(PipelineError::EmptyBatch);
        }
        Ok(Self {
            positive_count,
            negative_count,
            neutral_count,
            total,
        })
    }

    pub fn positive_count(&self) -> usize {
        self.positive_count
    }

    pub fn negative_count(&self) -> usize {
        self.negative_count
    }

    pub fn neutral_count(&self) -> usize {
        self.neutral_count
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn count(&self, sentiment: Sentiment) -> usize {
        match sentiment {
            Sentiment::Positive => self.positive_count,
            Sentiment::Neutral => self.neutral_count,
            Sentiment::Negative => self.negative_count,
        }
    }
}

/// Count posts per sentiment.
///
/// Fails with `EmptyBatch` when there is nothing to count.
pub fn aggregate(posts: &[Post]) -> Result<AggregateResult, PipelineError> {
    let (mut positive, mut negative, mut neutral) = (0, 0, 0);
    for post in posts {
        match post.sentiment {
            Sentiment::Positive => positive += 1,
            Sentiment::Negative => negative += 1,
            Sentiment::Neutral => neutral += 1,
        }
    }
    AggregateResult::from_counts(positive, negative, neutral)
}
