use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};

use crate::error::ApiResult;
use crate::state::AppState;

/// Health check routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/v1/ping", get(ping))
}

/// Full health check — verifies the content lake answers queries.
async fn health_check(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    state.client().ping().await.map_err(|err| {
        crate::error::ApiError::Internal(format!("content lake health check failed: {err}"))
    })?;

    Ok(Json(json!({
        "status": "ok",
        "contentLake": "reachable",
    })))
}

/// Lightweight ping — no upstream call.
async fn ping() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
