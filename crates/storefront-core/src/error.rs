//! Shared error type across storefront crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, StorefrontError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Domain lookup miss. Carries the entity name used in the client-facing
    /// message (`"User"`, `"Product"`). Recovered at the handler boundary,
    /// never fatal.
    #[error("{0} not found")]
    NotFound(&'static str),
    /// Startup configuration problem (invalid config file, duplicate metric
    /// registration). Aborts process initialization.
    #[error("configuration error: {0}")]
    Config(String),
    #[error("internal: {0}")]
    Internal(String),
}
