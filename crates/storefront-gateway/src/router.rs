//! Axum router wiring.
//!
//! Explicit route table; the request pipeline is layered over every route,
//! including the implicit 404 fallback.

use axum::{middleware, routing::get, Router};

use crate::{app_state::AppState, pipeline, routes};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health::health))
        .route("/metrics", get(routes::metrics::metrics))
        .route("/users", get(routes::users::list_users))
        .route("/users/:id", get(routes::users::get_user))
        .route("/products", get(routes::products::list_products))
        .route("/products/:id", get(routes::products::get_product))
        .layer(middleware::from_fn(pipeline::log_requests))
        .with_state(state)
}
