//! Inventory persistence seam.
//!
//! `apply_adjustment` is the single write path: it lazily creates the ledger
//! row, adds the delta (no floor), and appends the history entry in
//! one store call so the Postgres backend can wrap it in one transaction.

use async_trait::async_trait;

use merx_core::{PageParams, ServiceResult};

use crate::model::{AdjustmentRecord, HistoryEntry, InventoryRow};

pub mod memory;
pub mod postgres;

pub use memory::MemoryInventoryStore;
pub use postgres::PgInventoryStore;

#[async_trait]
pub trait InventoryStore: Send + Sync {
    /// Apply a signed adjustment, creating the row (quantity 0, default
    /// minStock) when absent, and append the audit entry. Returns the row
    /// after the change.
    async fn apply_adjustment(&self, record: AdjustmentRecord) -> ServiceResult<InventoryRow>;

    async fn find_by_product(&self, product_id: i64) -> ServiceResult<Option<InventoryRow>>;

    /// Page of ledger rows ordered by id, plus the total row count.
    async fn list(&self, page: PageParams) -> ServiceResult<(Vec<InventoryRow>, u64)>;

    /// Page of history entries, newest first, optionally filtered by
    /// product, plus the total match count.
    async fn history(
        &self,
        product_id: Option<i64>,
        page: PageParams,
    ) -> ServiceResult<(Vec<HistoryEntry>, u64)>;
}
