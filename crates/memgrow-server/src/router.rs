//! Axum router wiring.
//!
//! `/healthz` and `/metrics` are reserved; every other path and method falls
//! through to the status handler.

use axum::{middleware, routing::get, Router};

use crate::{app_state::AppState, obs, ops, status};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(ops::healthz))
        .route("/metrics", get(ops::metrics))
        .fallback(status::status)
        .layer(middleware::from_fn_with_state(state.clone(), obs::trace::track_request))
        .with_state(state)
}
