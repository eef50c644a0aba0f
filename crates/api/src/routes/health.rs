//! Health check endpoint, mounted at the root (not under `/api/v1`).

use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use crate::state::AppState;

/// `GET /health` -> `{ "status": "ok" }`.
///
/// Deliberately does not touch the database: this is a liveness probe, not a
/// readiness probe.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
