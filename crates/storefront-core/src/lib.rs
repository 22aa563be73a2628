//! Framework-free core for the storefront service.
//!
//! Holds the unified error type, the in-process metrics registry, and the
//! seeded domain catalogs. The HTTP surface lives in `storefront-gateway`;
//! nothing in this crate knows about axum or tokio.

pub mod catalog;
pub mod error;
pub mod metrics;
