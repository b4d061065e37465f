//! Service status and record counts.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use hbnb_app::ports::Storage;
use hbnb_app::services::record_service::Stats;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct Status {
    status: &'static str,
}

/// `GET /api/v1/status`
pub async fn status() -> Json<Status> {
    Json(Status { status: "OK" })
}

/// `GET /api/v1/stats`
pub async fn stats<S: Storage>(State(state): State<AppState<S>>) -> Result<Json<Stats>, ApiError> {
    Ok(Json(state.records.stats().await?))
}
