use axum::{http::StatusCode, Json};
use serde_json::json;

/// Constant liveness probe. No metric, no domain lookup.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
