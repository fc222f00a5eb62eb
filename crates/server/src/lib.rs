//! HTTP API for moodcast: router, shared state and server metrics.

pub mod api;
pub mod metrics;
pub mod state;
