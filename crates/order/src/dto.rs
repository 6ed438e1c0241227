use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::model::{Order, OrderItem};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
    pub id: i64,
    pub order_number: String,
    pub partner_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_name: Option<String>,
    pub status: String,
    pub total_amount: Decimal,
    pub shipping_address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<OrderItemDto>>,
    /// Product ids whose stock decrement did not go through. Only ever
    /// populated on the create response.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stock_adjustment_failures: Vec<i64>,
}

impl OrderDto {
    /// List-shaped projection: header only, no collaborator lookups.
    pub fn light(order: &Order) -> Self {
        Self {
            id: order.id,
            order_number: order.order_number.clone(),
            partner_id: order.partner_id,
            partner_name: None,
            status: order.status.clone(),
            total_amount: order.total_amount,
            shipping_address: order.shipping_address.clone(),
            created_at: order.created_at,
            updated_at: order.updated_at,
            items: None,
            stock_adjustment_failures: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemDto {
    pub id: i64,
    pub order_id: i64,
    pub product_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub sub_total: Decimal,
}

impl OrderItemDto {
    pub fn from_item(item: &OrderItem, product_name: Option<String>) -> Self {
        Self {
            id: item.id,
            order_id: item.order_id,
            product_id: item.product_id,
            product_name,
            quantity: item.quantity,
            unit_price: item.unit_price,
            sub_total: item.sub_total,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub partner_id: i64,
    #[serde(default)]
    pub shipping_address: Option<String>,
    pub items: Vec<OrderItemRequest>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemRequest {
    pub product_id: i64,
    pub quantity: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}
