//! Analyze a batch supplied by the caller.

use axum::{extract::State, http::StatusCode, Json};
use moodcast_core::{PipelineError, PipelineReport, RawPost};
use serde::Deserialize;
use std::sync::Arc;

use super::handlers::ErrorResponse;
use crate::state::AppState;

/// Request body for `POST /analyze`
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub posts: Vec<RawPost>,
}

/// POST /api/v1/analyze
///
/// Runs the pipeline over the given posts. Nothing is fetched or published.
pub async fn analyze(
    State(state): State<Arc<AppState>>,
    Json(body): Json<AnalyzeRequest>,
) -> Result<Json<PipelineReport>, (StatusCode, Json<ErrorResponse>)> {
    match state.pipeline().run(body.posts) {
        Ok(report) => Ok(Json(report)),
        Err(e @ PipelineError::EmptyBatch) => Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse::new("no data").with_message(e.to_string())),
        )),
        Err(e @ PipelineError::Scoring(_)) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("scoring failed").with_message(e.to_string())),
        )),
    }
}
