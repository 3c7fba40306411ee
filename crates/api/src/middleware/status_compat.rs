//! Status-code compatibility for clients of the older interface, which
//! reported every failure (missing entity, duplicate pair, bad rating) as
//! `400 Bad Request`.
//!
//! The JSON body is left untouched, so the `code` field still distinguishes
//! `NOT_FOUND` from `CONFLICT`.

use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::Response;

use crate::config::ErrorStatusMode;
use crate::state::AppState;

/// Map a response status under the given mode.
pub fn map_status(mode: ErrorStatusMode, status: StatusCode) -> StatusCode {
    match (mode, status) {
        (ErrorStatusMode::Legacy, StatusCode::NOT_FOUND | StatusCode::CONFLICT) => {
            StatusCode::BAD_REQUEST
        }
        _ => status,
    }
}

/// Middleware applied to the `/api/v1` routes.
pub async fn legacy_status_codes(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;
    let mapped = map_status(state.config.error_status_mode, response.status());
    if mapped != response.status() {
        tracing::debug!(from = %response.status(), to = %mapped, "Legacy status rewrite");
        *response.status_mut() = mapped;
    }
    response
}
