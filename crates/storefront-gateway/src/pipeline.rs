//! Request pipeline: incoming/outgoing log events around dispatch.
//!
//! This is middleware rather than per-handler calls so the ordering holds on
//! every path: the incoming event fires before route matching (404s
//! included), and the outgoing event fires after the response exists and
//! carries the real final status. Metric timers started inside handlers live
//! strictly between the two events.

use std::net::SocketAddr;

use axum::extract::{ConnectInfo, Request};
use axum::middleware::Next;
use axum::response::Response;

pub async fn log_requests(
    connect_info: Option<ConnectInfo<SocketAddr>>,
    req: Request,
    next: Next,
) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    // ConnectInfo is absent when the router is driven directly (tests).
    let remote_addr = connect_info
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_else(|| "unknown".to_owned());

    tracing::info!(%method, path = %path, %remote_addr, "incoming request");

    let res = next.run(req).await;

    tracing::info!(status = res.status().as_u16(), path = %path, "outgoing response");
    res
}
