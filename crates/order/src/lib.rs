//! Order processing service.
//!
//! The write path is the interesting part: creating an order validates the
//! partner and prices every line against the product catalog before any
//! row is written, persists the header and lines atomically, then issues
//! best-effort stock decrements against the inventory service. Reads
//! enrich rows with partner and product names, degrading to placeholders
//! when a collaborator is unreachable.

use std::sync::Arc;

use axum::{Extension, Router};

use crate::service::OrderService;

pub mod dto;
pub mod model;
pub mod number;
pub mod routes;
pub mod service;
pub mod store;

/// Build the full HTTP router (used by `main.rs` and the black-box tests).
pub fn build_app(service: Arc<OrderService>) -> Router {
    routes::router().layer(Extension(service))
}
