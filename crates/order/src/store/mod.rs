//! Order persistence seam.
//!
//! `create` takes the header and all lines in one call so the Postgres
//! backend can commit them in a single transaction. Reads apply the
//! active-only (`deleted = false`) predicate here, not in the callers.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use merx_core::{PageParams, ServiceResult};

use crate::model::{ItemDraft, Order, OrderDraft, OrderItem};

pub mod memory;
pub mod postgres;

pub use memory::MemoryOrderStore;
pub use postgres::PgOrderStore;

#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Persists the header and all of its lines as one unit. Nothing is
    /// written if any part fails.
    async fn create(
        &self,
        draft: OrderDraft,
        items: Vec<ItemDraft>,
    ) -> ServiceResult<(Order, Vec<OrderItem>)>;

    async fn find_active(&self, id: i64) -> ServiceResult<Option<Order>>;

    async fn items_for(&self, order_id: i64) -> ServiceResult<Vec<OrderItem>>;

    /// Active orders, newest first, optionally narrowed by a
    /// case-insensitive order-number fragment.
    async fn search(
        &self,
        keyword: Option<&str>,
        page: PageParams,
    ) -> ServiceResult<(Vec<Order>, u64)>;

    async fn update_status(
        &self,
        id: i64,
        status: &str,
        now: DateTime<Utc>,
    ) -> ServiceResult<Option<Order>>;
}
