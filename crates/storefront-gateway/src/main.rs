//! storefront gateway binary.
//!
//! Read endpoints over seeded catalogs, a health probe, and a Prometheus
//! `/metrics` endpoint, with incoming/outgoing log events around every
//! request.

use std::net::SocketAddr;
use tracing_subscriber::{fmt, EnvFilter};

use storefront_gateway::{app_state, config, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg = config::load_from_file("storefront.yaml").expect("config load failed");
    let listen: SocketAddr = cfg
        .gateway
        .listen
        .parse()
        .expect("gateway.listen must be a valid SocketAddr");

    // Fatal here on duplicate metric registration, per startup contract.
    let state = app_state::AppState::new(cfg).expect("app state init failed");
    let app = router::build_router(state);

    tracing::info!(%listen, "storefront-gateway starting");
    let listener = tokio::net::TcpListener::bind(listen).await.expect("failed to bind");

    // connect-info so the request pipeline can log remote addresses.
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .expect("server failed");
}
