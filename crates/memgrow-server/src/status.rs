//! Status endpoint: current allocation count, interval, and custom message.
//!
//! Registered as the router fallback, so any method on any path other than
//! the ops routes (including `/`) lands here.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use memgrow_core::protocol::StatusBody;

use crate::app_state::AppState;

pub fn current(state: &AppState) -> StatusBody {
    let snap = state.allocator().snapshot();
    StatusBody::ok(
        snap.count,
        state.allocator().interval().as_secs(),
        &state.cfg().status.custom_message,
    )
}

pub async fn status(State(state): State<AppState>) -> Response {
    match current(&state).to_json() {
        Ok(body) => (StatusCode::OK, [(header::CONTENT_TYPE, "application/json")], body).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "status encode failed");
            (StatusCode::INTERNAL_SERVER_ERROR, e.code()).into_response()
        }
    }
}
