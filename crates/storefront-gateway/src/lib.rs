//! storefront gateway library entry.
//!
//! Wires the config loader, application state, request pipeline, and route
//! handlers into an axum service. Consumed by the binary (`main.rs`) and by
//! integration tests.

pub mod app_state;
pub mod config;
pub mod pipeline;
pub mod router;
pub mod routes;
