//! In-memory product store.
//!
//! Intended for tests/dev. Not optimized for performance.

use std::sync::RwLock;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;

use merx_core::{Error, PageParams, ServiceResult};

use super::{ProductFilter, ProductStore};
use crate::model::{Product, ProductDraft};

#[derive(Debug, Default)]
pub struct MemoryProductStore {
    rows: RwLock<Vec<Product>>,
    next_id: AtomicI64,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Raw snapshot including soft-deleted rows, for inspection in tests.
    pub fn all_rows(&self) -> Vec<Product> {
        self.rows.read().expect("lock poisoned").clone()
    }

    fn lock_err() -> Error {
        Error::Storage("lock poisoned".to_string())
    }
}

fn matches(product: &Product, filter: &ProductFilter) -> bool {
    if let Some(keyword) = &filter.keyword {
        if !product.name.to_lowercase().contains(&keyword.to_lowercase()) {
            return false;
        }
    }
    if let Some(category) = &filter.category {
        if product.category.as_deref() != Some(category.as_str()) {
            return false;
        }
    }
    if let Some(status) = &filter.status {
        if &product.status != status {
            return false;
        }
    }
    true
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn insert(&self, draft: ProductDraft) -> ServiceResult<Product> {
        let mut rows = self.rows.write().map_err(|_| Self::lock_err())?;
        let product = Product {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            name: draft.name,
            sku: draft.sku,
            category: draft.category,
            price: draft.price,
            stock_quantity: draft.stock_quantity,
            status: draft.status,
            created_at: draft.created_at,
            updated_at: draft.updated_at,
            deleted: false,
        };
        rows.push(product.clone());
        Ok(product)
    }

    async fn find_active(&self, id: i64) -> ServiceResult<Option<Product>> {
        let rows = self.rows.read().map_err(|_| Self::lock_err())?;
        Ok(rows.iter().find(|p| p.id == id && !p.deleted).cloned())
    }

    async fn sku_exists(&self, sku: &str) -> ServiceResult<bool> {
        let rows = self.rows.read().map_err(|_| Self::lock_err())?;
        Ok(rows.iter().any(|p| p.sku == sku && !p.deleted))
    }

    async fn search(
        &self,
        filter: &ProductFilter,
        page: PageParams,
    ) -> ServiceResult<(Vec<Product>, u64)> {
        let rows = self.rows.read().map_err(|_| Self::lock_err())?;
        let mut matched: Vec<Product> = rows
            .iter()
            .filter(|p| !p.deleted && matches(p, filter))
            .cloned()
            .collect();
        // Newest first; id breaks created_at ties from a fixed test clock.
        matched.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        let total = matched.len() as u64;
        let content = matched
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect();
        Ok((content, total))
    }

    async fn update(&self, product: Product) -> ServiceResult<Product> {
        let mut rows = self.rows.write().map_err(|_| Self::lock_err())?;
        let row = rows
            .iter_mut()
            .find(|p| p.id == product.id && !p.deleted)
            .ok_or_else(|| Error::not_found(format!("product not found: {}", product.id)))?;
        *row = product.clone();
        Ok(product)
    }

    async fn soft_delete(&self, id: i64) -> ServiceResult<bool> {
        let mut rows = self.rows.write().map_err(|_| Self::lock_err())?;
        match rows.iter_mut().find(|p| p.id == id && !p.deleted) {
            Some(row) => {
                row.deleted = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
