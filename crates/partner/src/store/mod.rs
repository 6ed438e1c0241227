//! Partner persistence seam.
//!
//! One trait, two backends: `memory` for tests/dev, `postgres` for the
//! service binary. Every read applies the active-only (`deleted = false`)
//! predicate here, not in the callers.

use async_trait::async_trait;

use merx_core::{PageParams, ServiceResult};

use crate::model::{Partner, PartnerDraft};

pub mod memory;
pub mod postgres;

pub use memory::MemoryPartnerStore;
pub use postgres::PgPartnerStore;

/// List filters; `None` means "no constraint".
#[derive(Debug, Clone, Default)]
pub struct PartnerFilter {
    /// Case-insensitive substring match on the partner name.
    pub keyword: Option<String>,
    /// Exact partner type.
    pub kind: Option<String>,
}

#[async_trait]
pub trait PartnerStore: Send + Sync {
    async fn insert(&self, draft: PartnerDraft) -> ServiceResult<Partner>;

    /// Fetch a non-deleted partner.
    async fn find_active(&self, id: i64) -> ServiceResult<Option<Partner>>;

    /// Filtered page of non-deleted partners, newest id first, plus the
    /// total match count.
    async fn search(
        &self,
        filter: &PartnerFilter,
        page: PageParams,
    ) -> ServiceResult<(Vec<Partner>, u64)>;

    /// Overwrite all mutable fields of an existing row.
    async fn update(&self, partner: Partner) -> ServiceResult<Partner>;

    /// Mark the row deleted. Returns false when no active row matched.
    async fn soft_delete(&self, id: i64) -> ServiceResult<bool>;
}
