//! Health check handlers.

use axum::{routing::get, Router};

use outcome::Outcome;

use crate::state::AppState;

/// Create health routes.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = Outcome)
    )
)]
pub async fn health_check() -> Outcome {
    Outcome::success_with_message("healthy").with_metadata("version", env!("CARGO_PKG_VERSION"))
}
