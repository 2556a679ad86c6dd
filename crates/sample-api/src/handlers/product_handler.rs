//! Product handlers.

use axum::{extract::State, routing::get, Router};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use outcome::{ErrorType, Outcome, PageRequest, PagedResult};

use crate::extractors::{Path, Query, ValidatedJson};
use crate::models::{CreateProductRequest, PriceQuote, Product};
use crate::state::AppState;

/// Price query parameters
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PriceQuery {
    /// Number of units, at least 1
    pub quantity: u64,
}

/// Create product routes
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/:id", get(get_product).delete(delete_product))
        .route("/:id/price", get(get_price))
}

/// List products one page at a time
#[utoipa::path(
    get,
    path = "/products",
    tag = "Products",
    params(PageRequest),
    responses(
        (status = 200, description = "Page of products with paging info", body = Vec<Product>)
    )
)]
pub async fn list_products(
    State(state): State<AppState>,
    Query(request): Query<PageRequest>,
) -> PagedResult<Vec<Product>> {
    state.product_service.list(request).await
}

/// Get product by ID
#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "Products",
    params(("id" = Uuid, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 404, description = "Product not found", body = Outcome)
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> outcome::Result<Product> {
    state.product_service.get(id).await
}

/// Create a product
#[utoipa::path(
    post,
    path = "/products",
    tag = "Products",
    request_body = CreateProductRequest,
    responses(
        (status = 200, description = "Product created", body = Product),
        (status = 400, description = "Malformed or invalid request", body = Outcome),
        (status = 409, description = "Product name already taken", body = Outcome)
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateProductRequest>,
) -> outcome::Result<Product> {
    state.product_service.create(request).await
}

/// Delete product by ID
#[utoipa::path(
    delete,
    path = "/products/{id}",
    tag = "Products",
    params(("id" = Uuid, Path, description = "Product ID")),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 404, description = "Product not found", body = Outcome)
    )
)]
pub async fn delete_product(State(state): State<AppState>, Path(id): Path<Uuid>) -> Outcome {
    state.product_service.delete(id).await
}

/// Quote the price of a quantity of one product
#[utoipa::path(
    get,
    path = "/products/{id}/price",
    tag = "Products",
    params(("id" = Uuid, Path, description = "Product ID"), PriceQuery),
    responses(
        (status = 200, description = "Price quote", body = PriceQuote),
        (status = 404, description = "Product not found", body = Outcome),
        (status = 400, description = "Quantity rejected or total out of range", body = Outcome)
    )
)]
pub async fn get_price(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<PriceQuery>,
) -> outcome::Result<PriceQuote> {
    let quantity = query.quantity;

    state
        .product_service
        .get(id)
        .await
        .ensure(|_| quantity > 0, "Quantity must be at least 1")
        .try_catch_as(|product| total_cents(&product, quantity).map(|total| (product, total)), ErrorType::Invalid)
        .map(|(product, total_cents)| PriceQuote {
            product_id: product.id,
            quantity,
            unit_price_cents: product.price_cents,
            total_cents,
        })
}

fn total_cents(product: &Product, quantity: u64) -> Result<u64, String> {
    product
        .price_cents
        .checked_mul(quantity)
        .ok_or_else(|| format!("Total for {quantity} x {} overflows", product.name))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use super::*;
    use crate::config::ApiConfig;
    use crate::routes::create_router;
    use crate::services::MockProductService;

    fn app(service: MockProductService) -> Router {
        create_router(AppState::new(Arc::new(service), ApiConfig::default()))
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_service_unavailable_is_forwarded() {
        let mut service = MockProductService::new();
        service
            .expect_get()
            .returning(|_| outcome::Result::unavailable("catalog offline"));

        let (status, body) = get_json(app(service), &format!("/products/{}", Uuid::new_v4())).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "Unavailable");
        assert_eq!(body["errors"][0]["message"], "catalog offline");
    }

    #[tokio::test]
    async fn test_price_quote() {
        let product = Product::new("Tea", 400);
        let id = product.id;

        let mut service = MockProductService::new();
        service
            .expect_get()
            .withf(move |requested| *requested == id)
            .returning(move |_| outcome::Result::success(product.clone()));

        let (status, body) = get_json(app(service), &format!("/products/{id}/price?quantity=3")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["value"]["totalCents"], 1200);
        assert_eq!(body["value"]["unitPriceCents"], 400);
    }

    #[tokio::test]
    async fn test_price_rejects_zero_quantity() {
        let mut service = MockProductService::new();
        service
            .expect_get()
            .returning(|_| outcome::Result::success(Product::new("Tea", 400)));

        let (status, body) =
            get_json(app(service), &format!("/products/{}/price?quantity=0", Uuid::new_v4())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], "Failure");
        assert_eq!(body["errors"][0]["message"], "Quantity must be at least 1");
    }

    #[tokio::test]
    async fn test_price_overflow_is_invalid() {
        let mut service = MockProductService::new();
        service
            .expect_get()
            .returning(|_| outcome::Result::success(Product::new("Gold", u64::MAX)));

        let (status, body) =
            get_json(app(service), &format!("/products/{}/price?quantity=2", Uuid::new_v4())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errors"][0]["errorType"], "Invalid");
        assert_eq!(body["errors"][0]["message"], "Total for 2 x Gold overflows");
    }

    #[tokio::test]
    async fn test_price_skips_missing_product() {
        let mut service = MockProductService::new();
        service
            .expect_get()
            .returning(|id| outcome::Result::not_found(format!("Product {id} not found")));

        let (status, body) =
            get_json(app(service), &format!("/products/{}/price?quantity=0", Uuid::new_v4())).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["status"], "NotFound");
    }
}
