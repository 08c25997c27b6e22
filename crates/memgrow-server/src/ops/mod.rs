//! Operational HTTP endpoints.
//!
//! - `/healthz` : liveness
//! - `/metrics` : Prometheus text format

use axum::{extract::State, http::StatusCode, response::{IntoResponse, Response}};

use crate::app_state::AppState;

pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub async fn metrics(State(state): State<AppState>) -> Response {
    (
        StatusCode::OK,
        [(axum::http::header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        state.metrics().render(),
    )
        .into_response()
}
