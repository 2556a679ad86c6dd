//! Diagnostics handlers.

use axum::{routing::get, Router};

use outcome::Outcome;

use crate::state::AppState;

/// Create debug routes.
pub fn debug_routes() -> Router<AppState> {
    Router::new().route("/panic", get(trigger_panic))
}

/// Panic inside a handler to exercise the panic boundary.
#[utoipa::path(
    get,
    path = "/debug/panic",
    tag = "Debug",
    responses(
        (status = 500, description = "Failure outcome produced by the panic boundary", body = Outcome)
    )
)]
pub async fn trigger_panic() -> Outcome {
    panic!("debug panic requested")
}
