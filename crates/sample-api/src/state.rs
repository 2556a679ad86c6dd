//! Application state for dependency injection.

use std::sync::Arc;

use crate::config::ApiConfig;
use crate::services::ProductService;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub product_service: Arc<dyn ProductService>,
    pub config: ApiConfig,
}

impl AppState {
    /// Create new app state.
    pub fn new(product_service: Arc<dyn ProductService>, config: ApiConfig) -> Self {
        Self {
            product_service,
            config,
        }
    }
}
