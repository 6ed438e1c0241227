//! Partner directory service.
//!
//! Owns partner (customer/supplier/logistics) records with soft-delete
//! semantics. Exposes CRUD under `/partners`; other services reference
//! partners by id only and re-fetch through this API.

use std::sync::Arc;

use axum::{Extension, Router};

use crate::service::PartnerService;

pub mod dto;
pub mod model;
pub mod routes;
pub mod service;
pub mod store;

/// Build the full HTTP router (used by `main.rs` and the black-box tests).
pub fn build_app(service: Arc<PartnerService>) -> Router {
    routes::router().layer(Extension(service))
}
