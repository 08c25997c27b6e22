//! Logging setup and per-request tracing middleware.

use std::time::Instant;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tracing::Instrument;
use tracing_subscriber::{fmt, EnvFilter};

use crate::app_state::AppState;

/// Install the global `fmt` subscriber. `RUST_LOG` overrides the `info` default.
pub fn init() {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Wrap every request in a span carrying `req_id`, `method`, and `path`, log
/// receipt and completion, and feed the request metrics.
pub async fn track_request(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let req_id = state.metrics().next_request_id();
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let span = tracing::info_span!("request", req_id, method = %method, path = %path);

    async move {
        tracing::info!("request received");
        let started = Instant::now();
        let resp = next.run(req).await;
        let elapsed = started.elapsed();

        let status = resp.status();
        let route = metrics_route(&path);
        let metrics = state.metrics();
        metrics
            .http_requests
            .inc(&[("method", method.as_str()), ("path", route), ("status", status.as_str())]);
        metrics.http_duration.observe(&[("path", route)], elapsed);

        tracing::info!(status = status.as_u16(), latency_us = elapsed.as_micros() as u64, "request completed");
        resp
    }
    .instrument(span)
    .await
}

/// Collapse arbitrary paths into a fixed set so label cardinality stays bounded.
fn metrics_route(path: &str) -> &'static str {
    match path {
        "/healthz" => "/healthz",
        "/metrics" => "/metrics",
        "/" => "/",
        _ => "other",
    }
}
