//! Request/response DTOs and JSON mapping.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::model::Product;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: i64,
    pub name: String,
    pub sku: String,
    pub category: Option<String>,
    pub price: Decimal,
    pub stock_quantity: i32,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            sku: product.sku,
            category: product.category,
            price: product.price,
            stock_quantity: product.stock_quantity,
            status: product.status,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

/// Body of `POST /products`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub name: String,
    pub sku: String,
    pub category: Option<String>,
    pub price: Decimal,
    pub stock_quantity: Option<i32>,
    pub status: Option<String>,
}

/// Body of `PUT /products/{id}`: partial, only supplied fields overwrite.
/// SKU is never updated after creation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<Decimal>,
    pub stock_quantity: Option<i32>,
    pub status: Option<String>,
}
