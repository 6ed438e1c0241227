//! Product rows as stored.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

/// A row in `products`. SKU is unique among non-deleted rows; soft-deleted
/// rows keep their data (and their SKU may be reused).
#[derive(Debug, Clone, FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub sku: String,
    pub category: Option<String>,
    pub price: Decimal,
    pub stock_quantity: i32,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted: bool,
}

/// Field set for an insert; the store assigns the id.
#[derive(Debug, Clone)]
pub struct ProductDraft {
    pub name: String,
    pub sku: String,
    pub category: Option<String>,
    pub price: Decimal,
    pub stock_quantity: i32,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
