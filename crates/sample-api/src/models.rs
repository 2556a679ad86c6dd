//! Catalog types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    #[schema(example = "Espresso beans")]
    pub name: String,
    /// Unit price in cents
    #[schema(example = 1250)]
    pub price_cents: u64,
}

impl Product {
    pub fn new(name: impl Into<String>, price_cents: u64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            price_cents,
        }
    }
}

/// Product creation request with validation
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    #[schema(example = "Espresso beans")]
    pub name: String,
    #[validate(range(min = 1, message = "Price must be positive"))]
    #[schema(example = 1250)]
    pub price_cents: u64,
}

/// Price of a quantity of one product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    pub product_id: Uuid,
    pub quantity: u64,
    pub unit_price_cents: u64,
    pub total_cents: u64,
}
