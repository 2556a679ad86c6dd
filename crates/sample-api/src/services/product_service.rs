//! Product catalog service with an in-memory store.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use outcome::{AsOutcome, Outcome, PageRequest, PagedResult};

use crate::models::{CreateProductRequest, Product};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Product service trait for dependency injection.
///
/// Every operation reports through a status-tagged result, so handlers can
/// return them directly.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProductService: Send + Sync {
    /// One page of products in insertion order
    async fn list(&self, request: PageRequest) -> PagedResult<Vec<Product>>;

    /// Find product by ID
    async fn get(&self, id: Uuid) -> outcome::Result<Product>;

    /// Create a product; names are unique ignoring ASCII case
    async fn create(&self, request: CreateProductRequest) -> outcome::Result<Product>;

    /// Remove product by ID
    async fn delete(&self, id: Uuid) -> Outcome;
}

/// Product service backed by a vector behind a lock.
#[derive(Default)]
pub struct InMemoryProductService {
    products: RwLock<Vec<Product>>,
}

impl InMemoryProductService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with the given products.
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: RwLock::new(products),
        }
    }
}

#[async_trait]
impl ProductService for InMemoryProductService {
    async fn list(&self, request: PageRequest) -> PagedResult<Vec<Product>> {
        let products = self.products.read().await;
        let items = products
            .iter()
            .skip(usize::try_from(request.offset()).unwrap_or(usize::MAX))
            .take(usize::try_from(request.limit()).unwrap_or(usize::MAX))
            .cloned()
            .collect();

        PagedResult::from_page(items, &request, products.len() as u64)
    }

    async fn get(&self, id: Uuid) -> outcome::Result<Product> {
        let products = self.products.read().await;
        outcome::Result::from_option(
            products.iter().find(|p| p.id == id).cloned(),
            format!("Product {id} not found"),
        )
    }

    async fn create(&self, request: CreateProductRequest) -> outcome::Result<Product> {
        let mut products = self.products.write().await;

        outcome::Result::validated(request)
            .bind(|request| {
                if products.iter().any(|p| p.name.eq_ignore_ascii_case(&request.name)) {
                    return outcome::Result::conflict(format!(
                        "Product '{}' already exists",
                        request.name
                    ));
                }
                let product = Product::new(request.name, request.price_cents);
                products.push(product.clone());
                outcome::Result::success(product)
            })
            .tap(|product| tracing::info!(product_id = %product.id, "product created"))
            .tap_error(|errors| tracing::debug!(?errors, "product rejected"))
    }

    async fn delete(&self, id: Uuid) -> Outcome {
        let mut products = self.products.write().await;
        match products.iter().position(|p| p.id == id) {
            Some(index) => {
                products.remove(index);
                Outcome::no_content()
            }
            None => Outcome::not_found(format!("Product {id} not found")),
        }
    }
}
