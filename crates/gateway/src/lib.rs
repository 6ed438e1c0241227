//! API gateway.
//!
//! Single public entry point for the merx services. Requests are relayed
//! unmodified to the service owning the first path segment; the gateway
//! adds no business logic of its own.

use std::sync::Arc;

use axum::{Extension, Router};

use crate::proxy::Proxy;

pub mod proxy;
pub mod routes;

/// Build the full HTTP router (used by `main.rs` and the black-box tests).
pub fn build_app(proxy: Arc<Proxy>) -> Router {
    routes::router().layer(Extension(proxy))
}
