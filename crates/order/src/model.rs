use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

/// Persisted order header. `deleted` rows are invisible to every read path.
#[derive(Debug, Clone, FromRow)]
pub struct Order {
    pub id: i64,
    pub order_number: String,
    pub partner_id: i64,
    pub status: String,
    pub total_amount: Decimal,
    pub shipping_address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted: bool,
}

#[derive(Debug, Clone, FromRow)]
pub struct OrderItem {
    pub id: i64,
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub sub_total: Decimal,
}

/// Header fields computed by the service before the row exists.
#[derive(Debug, Clone)]
pub struct OrderDraft {
    pub order_number: String,
    pub partner_id: i64,
    pub status: String,
    pub total_amount: Decimal,
    pub shipping_address: Option<String>,
    pub now: DateTime<Utc>,
}

/// A fully priced line, ready to persist alongside its header.
#[derive(Debug, Clone)]
pub struct ItemDraft {
    pub product_id: i64,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub sub_total: Decimal,
}
