//! The classification pipeline.
//!
//! A batch of fetched posts flows through five stages, each fully consuming
//! its input before the next starts:
//!
//! ```text
//!  RawPost ──clean──► CleanedPost ──score──► Post ──dedup──► Vec<Post>
//!                                                               │
//!             DecisionOutcome ◄──decide── AggregateResult ◄─aggregate
//! ```
//!
//! The pipeline performs no I/O. Fetching the batch and publishing the
//! message are the job of [`crate::feed`] and [`crate::service`].
//!
//! # Example
//!
//! ```ignore
//! use moodcast_core::{Config, Pipeline, RawPost};
//!
//! let pipeline = Pipeline::from_config(&Config::default());
//! let report = pipeline.run(vec![RawPost::new("what a great day", 0)])?;
//! println!("{}", report.outcome.message);
//! ```

mod aggregate;
mod decision;
mod dedup;
mod post;
mod runner;

pub use aggregate::{aggregate, AggregateResult};
pub use decision::{DecisionEngine, DecisionOutcome, Mood, MoodRatios};
pub use dedup::{deduplicate_posts, DedupOutcome};
pub use post::{CleanedPost, Post, RawPost};
pub use runner::{Pipeline, PipelineError, PipelineReport};
