//! Route configuration.

use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use outcome::middleware::catch_panic_layer;

use crate::handlers::{debug_routes, health_routes, product_routes};
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    let panic_layer = catch_panic_layer(&state.config.http);

    Router::new()
        .nest("/health", health_routes())
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/products", product_routes())
        .nest("/debug", debug_routes())
        .with_state(state)
        .layer(panic_layer)
        .layer(TraceLayer::new_for_http())
}
