//! In-memory inventory store.
//!
//! Intended for tests/dev. Not optimized for performance.

use std::sync::RwLock;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;

use merx_core::{Error, PageParams, ServiceResult};

use super::InventoryStore;
use crate::model::{AdjustmentRecord, DEFAULT_MIN_STOCK, HistoryEntry, InventoryRow};

#[derive(Debug, Default)]
pub struct MemoryInventoryStore {
    rows: RwLock<Vec<InventoryRow>>,
    history: RwLock<Vec<HistoryEntry>>,
    next_row_id: AtomicI64,
    next_history_id: AtomicI64,
}

impl MemoryInventoryStore {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
            history: RwLock::new(Vec::new()),
            next_row_id: AtomicI64::new(1),
            next_history_id: AtomicI64::new(1),
        }
    }

    /// Raw history snapshot, for inspection in tests.
    pub fn all_history(&self) -> Vec<HistoryEntry> {
        self.history.read().expect("lock poisoned").clone()
    }

    fn lock_err() -> Error {
        Error::Storage("lock poisoned".to_string())
    }
}

#[async_trait]
impl InventoryStore for MemoryInventoryStore {
    async fn apply_adjustment(&self, record: AdjustmentRecord) -> ServiceResult<InventoryRow> {
        let mut rows = self.rows.write().map_err(|_| Self::lock_err())?;
        let mut history = self.history.write().map_err(|_| Self::lock_err())?;

        let row = match rows.iter_mut().find(|r| r.product_id == record.product_id) {
            Some(row) => {
                row.quantity += record.quantity_changed;
                row.clone()
            }
            None => {
                let row = InventoryRow {
                    id: self.next_row_id.fetch_add(1, Ordering::SeqCst),
                    product_id: record.product_id,
                    quantity: record.quantity_changed,
                    min_stock: DEFAULT_MIN_STOCK,
                };
                rows.push(row.clone());
                row
            }
        };

        history.push(HistoryEntry {
            id: self.next_history_id.fetch_add(1, Ordering::SeqCst),
            product_id: record.product_id,
            quantity_changed: record.quantity_changed,
            kind: record.kind.as_str().to_string(),
            reason: record.reason,
            reference_id: record.reference_id,
            created_at: record.created_at,
        });

        Ok(row)
    }

    async fn find_by_product(&self, product_id: i64) -> ServiceResult<Option<InventoryRow>> {
        let rows = self.rows.read().map_err(|_| Self::lock_err())?;
        Ok(rows.iter().find(|r| r.product_id == product_id).cloned())
    }

    async fn list(&self, page: PageParams) -> ServiceResult<(Vec<InventoryRow>, u64)> {
        let rows = self.rows.read().map_err(|_| Self::lock_err())?;
        let mut sorted: Vec<InventoryRow> = rows.clone();
        sorted.sort_by_key(|r| r.id);
        let total = sorted.len() as u64;
        let content = sorted
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect();
        Ok((content, total))
    }

    async fn history(
        &self,
        product_id: Option<i64>,
        page: PageParams,
    ) -> ServiceResult<(Vec<HistoryEntry>, u64)> {
        let history = self.history.read().map_err(|_| Self::lock_err())?;
        let mut matched: Vec<HistoryEntry> = history
            .iter()
            .filter(|h| product_id.is_none_or(|id| h.product_id == id))
            .cloned()
            .collect();
        matched.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        let total = matched.len() as u64;
        let content = matched
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect();
        Ok((content, total))
    }
}
