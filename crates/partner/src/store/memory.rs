//! In-memory partner store.
//!
//! Intended for tests/dev. Not optimized for performance.

use std::sync::RwLock;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;

use merx_core::{Error, PageParams, ServiceResult};

use super::{PartnerFilter, PartnerStore};
use crate::model::{Partner, PartnerDraft};

#[derive(Debug, Default)]
pub struct MemoryPartnerStore {
    rows: RwLock<Vec<Partner>>,
    next_id: AtomicI64,
}

impl MemoryPartnerStore {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Raw snapshot including soft-deleted rows, for inspection in tests.
    pub fn all_rows(&self) -> Vec<Partner> {
        self.rows.read().expect("lock poisoned").clone()
    }

    fn lock_err() -> Error {
        Error::Storage("lock poisoned".to_string())
    }
}

fn matches(partner: &Partner, filter: &PartnerFilter) -> bool {
    if let Some(keyword) = &filter.keyword {
        if !partner.name.to_lowercase().contains(&keyword.to_lowercase()) {
            return false;
        }
    }
    if let Some(kind) = &filter.kind {
        if &partner.kind != kind {
            return false;
        }
    }
    true
}

#[async_trait]
impl PartnerStore for MemoryPartnerStore {
    async fn insert(&self, draft: PartnerDraft) -> ServiceResult<Partner> {
        let mut rows = self.rows.write().map_err(|_| Self::lock_err())?;
        let partner = Partner {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            name: draft.name,
            kind: draft.kind,
            contact_person: draft.contact_person,
            email: draft.email,
            phone: draft.phone,
            address: draft.address,
            status: draft.status,
            created_at: draft.created_at,
            updated_at: draft.updated_at,
            deleted: false,
        };
        rows.push(partner.clone());
        Ok(partner)
    }

    async fn find_active(&self, id: i64) -> ServiceResult<Option<Partner>> {
        let rows = self.rows.read().map_err(|_| Self::lock_err())?;
        Ok(rows.iter().find(|p| p.id == id && !p.deleted).cloned())
    }

    async fn search(
        &self,
        filter: &PartnerFilter,
        page: PageParams,
    ) -> ServiceResult<(Vec<Partner>, u64)> {
        let rows = self.rows.read().map_err(|_| Self::lock_err())?;
        let mut matched: Vec<Partner> = rows
            .iter()
            .filter(|p| !p.deleted && matches(p, filter))
            .cloned()
            .collect();
        matched.sort_by(|a, b| b.id.cmp(&a.id));
        let total = matched.len() as u64;
        let content = matched
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect();
        Ok((content, total))
    }

    async fn update(&self, partner: Partner) -> ServiceResult<Partner> {
        let mut rows = self.rows.write().map_err(|_| Self::lock_err())?;
        let row = rows
            .iter_mut()
            .find(|p| p.id == partner.id && !p.deleted)
            .ok_or_else(|| Error::not_found(format!("partner not found: {}", partner.id)))?;
        *row = partner.clone();
        Ok(partner)
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
