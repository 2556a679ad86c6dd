//! OpenAPI documentation.

use utoipa::OpenApi;

use outcome::{Error, Outcome, PagedInfo, ResultStatus};

use crate::models::{CreateProductRequest, PriceQuote, Product};

/// API documentation struct.
///
/// Every response is a result envelope: the documented body is the `value`
/// field for successes and the full [`Outcome`] for failures.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health_handler::health_check,
        crate::handlers::product_handler::list_products,
        crate::handlers::product_handler::get_product,
        crate::handlers::product_handler::create_product,
        crate::handlers::product_handler::delete_product,
        crate::handlers::product_handler::get_price,
        crate::handlers::debug_handler::trigger_panic,
    ),
    components(
        schemas(
            Outcome,
            Error,
            ResultStatus,
            PagedInfo,
            Product,
            CreateProductRequest,
            PriceQuote,
        )
    ),
    tags(
        (name = "Health", description = "Service health"),
        (name = "Products", description = "Product catalog endpoints"),
        (name = "Debug", description = "Diagnostics"),
    )
)]
pub struct ApiDoc;
