//! HTTP handlers.

pub mod debug_handler;
pub mod health_handler;
pub mod product_handler;

pub use debug_handler::debug_routes;
pub use health_handler::health_routes;
pub use product_handler::product_routes;
