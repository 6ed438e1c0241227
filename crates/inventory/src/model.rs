//! Inventory rows, history entries, and the derived stock status.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

pub const DEFAULT_MIN_STOCK: i32 = 10;

/// One row per product: the current quantity ledger.
///
/// Quantity has no floor; negative values represent backordered stock and
/// surface as OUT_OF_STOCK on the read path.
#[derive(Debug, Clone, FromRow)]
pub struct InventoryRow {
    pub id: i64,
    pub product_id: i64,
    pub quantity: i32,
    pub min_stock: i32,
}

/// An append-only audit entry; never updated after insert.
#[derive(Debug, Clone, FromRow)]
pub struct HistoryEntry {
    pub id: i64,
    pub product_id: i64,
    pub quantity_changed: i32,
    pub kind: String,
    pub reason: Option<String>,
    pub reference_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// An adjustment ready to apply: the signed delta plus its audit fields.
#[derive(Debug, Clone)]
pub struct AdjustmentRecord {
    pub product_id: i64,
    pub quantity_changed: i32,
    pub kind: AdjustmentKind,
    pub reason: Option<String>,
    pub reference_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdjustmentKind {
    Inbound,
    Outbound,
    Adjustment,
    /// Reserved for seed imports; never produced by the API.
    Init,
}

impl AdjustmentKind {
    /// Classification by sign, regardless of what the caller claims.
    pub fn classify(delta: i32) -> Self {
        if delta > 0 {
            Self::Inbound
        } else if delta < 0 {
            Self::Outbound
        } else {
            Self::Adjustment
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inbound => "INBOUND",
            Self::Outbound => "OUTBOUND",
            Self::Adjustment => "ADJUSTMENT",
            Self::Init => "INIT",
        }
    }
}

/// Read-path stock status; derived, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StockStatus {
    OutOfStock,
    LowStock,
    Normal,
}

impl StockStatus {
    pub fn derive(quantity: i32, min_stock: i32) -> Self {
        if quantity <= 0 {
            Self::OutOfStock
        } else if quantity <= min_stock {
            Self::LowStock
        } else {
            Self::Normal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn classify_by_sign() {
        assert_eq!(AdjustmentKind::classify(10), AdjustmentKind::Inbound);
        assert_eq!(AdjustmentKind::classify(-5), AdjustmentKind::Outbound);
        assert_eq!(AdjustmentKind::classify(0), AdjustmentKind::Adjustment);
    }

    #[test]
    fn status_boundaries() {
        assert_eq!(StockStatus::derive(0, 10), StockStatus::OutOfStock);
        assert_eq!(StockStatus::derive(-3, 10), StockStatus::OutOfStock);
        assert_eq!(StockStatus::derive(1, 10), StockStatus::LowStock);
        assert_eq!(StockStatus::derive(10, 10), StockStatus::LowStock);
        assert_eq!(StockStatus::derive(11, 10), StockStatus::Normal);
    }

    proptest! {
        #[test]
        fn status_partitions_are_exclusive_and_exhaustive(
            quantity in -1_000i32..1_000,
            min_stock in 0i32..1_000,
        ) {
            let status = StockStatus::derive(quantity, min_stock);
            if quantity <= 0 {
                prop_assert_eq!(status, StockStatus::OutOfStock);
            } else if quantity <= min_stock {
                prop_assert_eq!(status, StockStatus::LowStock);
            } else {
                prop_assert_eq!(status, StockStatus::Normal);
            }
        }
    }
}
