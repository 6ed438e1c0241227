//! Request/response DTOs and JSON mapping.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::Partner;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerDto {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub contact_person: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Partner> for PartnerDto {
    fn from(partner: Partner) -> Self {
        Self {
            id: partner.id,
            name: partner.name,
            kind: partner.kind,
            contact_person: partner.contact_person,
            email: partner.email,
            phone: partner.phone,
            address: partner.address,
            status: partner.status,
            created_at: partner.created_at,
            updated_at: partner.updated_at,
        }
    }
}

/// Body of both `POST /partners` and `PUT /partners/{id}` (whole-record
/// update, matching the public contract).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub contact_person: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub status: Option<String>,
}
