//! Route handlers and the handler-boundary error mapping.

pub mod health;
pub mod metrics;
pub mod products;
pub mod users;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use storefront_core::error::StorefrontError;

/// Handler-boundary wrapper so route functions can use `?` on core errors.
/// Lookup misses become the fixed 404 shape; anything else is a 500.
pub struct ApiError(pub StorefrontError);

impl From<StorefrontError> for ApiError {
    fn from(e: StorefrontError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            StorefrontError::NotFound(entity) => (
                StatusCode::NOT_FOUND,
                Json(json!({ "message": format!("{entity} not found") })),
            )
                .into_response(),
            other => {
                tracing::error!(error = %other, "handler failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "internal error" })),
                )
                    .into_response()
            }
        }
    }
}
