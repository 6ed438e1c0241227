//! Partner rows as stored.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A row in `partners`. Soft-deleted rows keep their data; every read path
/// filters on `deleted = false`.
#[derive(Debug, Clone, FromRow)]
pub struct Partner {
    pub id: i64,
    pub name: String,
    /// Supplier, Customer or Logistics (free text, as supplied).
    pub kind: String,
    pub contact_person: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted: bool,
}

/// Field set for an insert; the store assigns the id.
#[derive(Debug, Clone)]
pub struct PartnerDraft {
    pub name: String,
    pub kind: String,
    pub contact_person: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
