//! Request/response DTOs and JSON mapping.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{HistoryEntry, InventoryRow, StockStatus};

/// A ledger row enriched with product metadata and the derived status.
///
/// `id` is absent when the productId has no persisted row yet (reads default
/// a transient row instead of creating one).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryDto {
    pub id: Option<i64>,
    pub product_id: i64,
    pub quantity: i32,
    pub min_stock: i32,
    pub product_name: String,
    pub product_category: Option<String>,
    pub status: StockStatus,
}

impl InventoryDto {
    pub fn from_row(
        row: &InventoryRow,
        product_name: String,
        product_category: Option<String>,
    ) -> Self {
        Self {
            id: Some(row.id),
            product_id: row.product_id,
            quantity: row.quantity,
            min_stock: row.min_stock,
            product_name,
            product_category,
            status: StockStatus::derive(row.quantity, row.min_stock),
        }
    }
}

/// Body of `POST /inventory/adjust`.
///
/// The caller may label the adjustment, but the stored type is always
/// re-classified from the sign of `quantityChanged`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjustStockRequest {
    pub product_id: i64,
    pub quantity_changed: i32,
    pub reason: Option<String>,
    pub reference_id: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryDto {
    pub id: i64,
    pub product_id: i64,
    pub quantity_changed: i32,
    #[serde(rename = "type")]
    pub kind: String,
    pub reason: Option<String>,
    pub reference_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<HistoryEntry> for HistoryDto {
    fn from(entry: HistoryEntry) -> Self {
        Self {
            id: entry.id,
            product_id: entry.product_id,
            quantity_changed: entry.quantity_changed,
            kind: entry.kind,
            reason: entry.reason,
            reference_id: entry.reference_id,
            created_at: entry.created_at,
        }
    }
}
