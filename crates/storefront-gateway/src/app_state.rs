//! Shared application state for the storefront gateway.
//!
//! All dependencies are wired here at boot and handed to handlers through
//! axum's `State` extractor; there is no global registry access. Metric
//! handles are registered once during construction, so a duplicate name
//! surfaces as a startup error instead of a runtime surprise.

use std::sync::Arc;

use storefront_core::catalog::{seed_products, seed_users, Catalog, Product, User};
use storefront_core::error::Result;
use storefront_core::metrics::{Counter, Registry, Summary};

use crate::config::GatewayConfig;

const APP_VERSION: &str = "1.0.0";

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: GatewayConfig,
    users: Catalog<User>,
    products: Catalog<Product>,
    registry: Registry,
    user_requests: Counter,
    product_processing: Summary,
}

impl AppState {
    /// Build application state. Returns Result so main can handle startup
    /// errors gracefully (no panic inside the wiring itself).
    pub fn new(cfg: GatewayConfig) -> Result<Self> {
        let registry = Registry::new();
        registry.register_info("app_info", "Application info", &[("version", APP_VERSION)])?;
        let user_requests = registry.register_counter(
            "user_requests_total",
            "Total number of times the /users endpoint was called",
        )?;
        let product_processing = registry.register_summary(
            "product_processing_seconds",
            "Time spent processing the /products endpoint",
        )?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                cfg,
                users: seed_users(),
                products: seed_products(),
                registry,
                user_requests,
                product_processing,
            }),
        })
    }

    pub fn cfg(&self) -> &GatewayConfig {
        &self.inner.cfg
    }

    pub fn users(&self) -> &Catalog<User> {
        &self.inner.users
    }

    pub fn products(&self) -> &Catalog<Product> {
        &self.inner.products
    }

    pub fn registry(&self) -> &Registry {
        &self.inner.registry
    }

    pub fn user_requests(&self) -> &Counter {
        &self.inner.user_requests
    }

    pub fn product_processing(&self) -> &Summary {
        &self.inner.product_processing
    }
}
