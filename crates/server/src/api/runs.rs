//! Trigger a full fetch, analyze and publish run.

use axum::{extract::State, http::StatusCode, Json};
use moodcast_core::{FeedError, RunOutcome, ServiceError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

use super::handlers::ErrorResponse;
use crate::state::AppState;

/// Request body for `POST /runs`. Every field falls back to the feed config.
#[derive(Debug, Default, Deserialize)]
pub struct RunRequest {
    pub user_id: Option<String>,
    pub count: Option<u32>,
    #[serde(default)]
    pub dry_run: bool,
}

/// Error body for a run that ended without data.
#[derive(Debug, Serialize)]
pub struct NoDataResponse {
    pub error: String,
    pub fetched: usize,
}

type RunError = (StatusCode, Json<serde_json::Value>);

fn error_body(status: StatusCode, body: impl Serialize) -> RunError {
    (
        status,
        Json(serde_json::to_value(body).unwrap_or_default()),
    )
}

/// POST /api/v1/runs
pub async fn create_run(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RunRequest>,
) -> Result<Json<RunOutcome>, RunError> {
    let Some(service) = state.mood_service(body.dry_run) else {
        return Err(error_body(
            StatusCode::SERVICE_UNAVAILABLE,
            ErrorResponse::new("feed not configured"),
        ));
    };

    let query = state.feed_query(body.user_id, body.count);
    if query.count == 0 {
        return Err(error_body(
            StatusCode::BAD_REQUEST,
            ErrorResponse::new("count must be greater than 0"),
        ));
    }
    if query.user_id.is_empty() {
        return Err(error_body(
            StatusCode::BAD_REQUEST,
            ErrorResponse::new("user_id is required"),
        ));
    }

    match service.run_once(&query).await {
        Ok(RunOutcome::NoData { fetched }) => Err(error_body(
            StatusCode::UNPROCESSABLE_ENTITY,
            NoDataResponse {
                error: "no data".to_string(),
                fetched,
            },
        )),
        Ok(outcome) => Ok(Json(outcome)),
        Err(e) => {
            warn!(error = %e, "Run failed");
            let status = match &e {
                ServiceError::Feed(FeedError::AuthFailure(_)) => StatusCode::UNAUTHORIZED,
                ServiceError::Feed(_) => StatusCode::BAD_GATEWAY,
                ServiceError::Pipeline(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };
            let kind = match &e {
                ServiceError::Feed(f) => f.kind(),
                ServiceError::Pipeline(_) => "scoring_failed",
            };
            Err(error_body(
                status,
                ErrorResponse::new(kind).with_message(e.to_string()),
            ))
        }
    }
}
