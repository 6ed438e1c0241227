//! Product catalog service.
//!
//! Owns product records (SKU, price, category, status) with soft-delete
//! semantics. The catalog is the pricing source of record: the order
//! service re-fetches current prices from here at order time.

use std::sync::Arc;

use axum::{Extension, Router};

use crate::service::ProductService;

pub mod dto;
pub mod model;
pub mod routes;
pub mod service;
pub mod store;

/// Build the full HTTP router (used by `main.rs` and the black-box tests).
pub fn build_app(service: Arc<ProductService>) -> Router {
    routes::router().layer(Extension(service))
}
