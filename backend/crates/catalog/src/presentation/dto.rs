//! Data Transfer Objects
//!
//! Request/response shapes for the product endpoints. The wire casing is
//! camelCase throughout; `row_version` is internal and never serialized.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::entities::Product;

/// Body of POST /api/products and PUT /api/products/{id}
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
}

/// Query string of GET /api/products
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListProductsQuery {
    pub name: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
}

/// Product as returned to clients
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub created_by: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
    pub update_by: Option<String>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub deleted_by: Option<String>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            is_deleted: product.is_deleted,
            created_at: product.created_at,
            created_by: product.created_by,
            updated_at: product.updated_at,
            update_by: product.update_by,
            deleted_at: product.deleted_at,
            deleted_by: product.deleted_by,
        }
    }
}
