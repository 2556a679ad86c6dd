//! Catalog services.

pub mod product_service;

pub use product_service::{InMemoryProductService, ProductService};

#[cfg(any(test, feature = "test-utils"))]
pub use product_service::MockProductService;
