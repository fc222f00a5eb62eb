//! Sentiment scoring.
//!
//! Scoring is split in two layers:
//! - a **model** (`PolarityModel`, `CompoundModel`) turning text into a
//!   continuous value. It is opaque to the rest of the crate.
//! - a **scorer** (`SentimentScorer`) turning that value into a `Sentiment`
//!   category using a fixed strategy.
//!
//! ```text
//!   cleaned text ──► PolarityModel ──► PolarityScorer  (sign)        ──┐
//!                                                                      ├──► Sentiment
//!   cleaned text ──► CompoundModel ──► CompoundScorer  (thresholds)  ──┘
//! ```
//!
//! A pipeline run owns exactly one scorer; strategies are never mixed within a
//! single aggregate.

mod compound;
mod lexicon;
mod polarity;
mod traits;
mod types;

pub use compound::{classify_compound, CompoundScorer};
pub use lexicon::LexiconModel;
pub use polarity::{classify_polarity, PolarityScorer};
pub use traits::{CompoundModel, PolarityModel, ScoringError, SentimentScorer};
pub use types::Sentiment;

use crate::config::{ScorerConfig, ScorerStrategy};

/// Factory function to create the configured scorer backed by the built-in lexicon.
pub fn create_scorer(config: &ScorerConfig) -> Box<dyn SentimentScorer> {
    match config.strategy {
        ScorerStrategy::Polarity => Box::new(PolarityScorer::new(LexiconModel::new())),
        ScorerStrategy::Compound => Box::new(CompoundScorer::with_thresholds(
            LexiconModel::new(),
            config.compound_thresholds,
        )),
    }
}
