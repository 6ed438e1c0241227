//! Product persistence seam.
//!
//! One trait, two backends: `memory` for tests/dev, `postgres` for the
//! service binary. The active-only (`deleted = false`) predicate is applied
//! here on every read path.

use async_trait::async_trait;

use merx_core::{PageParams, ServiceResult};

use crate::model::{Product, ProductDraft};

pub mod memory;
pub mod postgres;

pub use memory::MemoryProductStore;
pub use postgres::PgProductStore;

/// List filters; `None` means "no constraint".
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    /// Case-insensitive substring match on the product name.
    pub keyword: Option<String>,
    /// Exact category.
    pub category: Option<String>,
    /// Exact status.
    pub status: Option<String>,
}

#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn insert(&self, draft: ProductDraft) -> ServiceResult<Product>;

    /// Fetch a non-deleted product.
    async fn find_active(&self, id: i64) -> ServiceResult<Option<Product>>;

    /// Whether a non-deleted row already claims this SKU.
    async fn sku_exists(&self, sku: &str) -> ServiceResult<bool>;

    /// Filtered page of non-deleted products, newest first, plus the total
    /// match count.
    async fn search(
        &self,
        filter: &ProductFilter,
        page: PageParams,
    ) -> ServiceResult<(Vec<Product>, u64)>;

    /// Overwrite all mutable fields of an existing row (SKU excluded).
    async fn update(&self, product: Product) -> ServiceResult<Product>;

    /// Mark the row deleted. Returns false when no active row matched.
    async fn soft_delete(&self, id: i64) -> ServiceResult<bool>;
}
