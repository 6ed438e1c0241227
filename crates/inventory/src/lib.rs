//! Inventory ledger service.
//!
//! Owns one quantity row per product plus an append-only adjustment history.
//! Rows are created lazily on first adjustment; the stock status
//! (NORMAL/LOW_STOCK/OUT_OF_STOCK) is derived on the read path and never
//! persisted.

use std::sync::Arc;

use axum::{Extension, Router};

use crate::service::InventoryService;

pub mod dto;
pub mod model;
pub mod routes;
pub mod service;
pub mod store;

/// Build the full HTTP router (used by `main.rs` and the black-box tests).
pub fn build_app(service: Arc<InventoryService>) -> Router {
    routes::router().layer(Extension(service))
}
