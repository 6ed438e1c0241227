//! Gateway routing: a health line at `/`, everything else proxied.

use std::sync::Arc;

use axum::body::to_bytes;
use axum::extract::{Extension, Request};
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;

use crate::proxy::Proxy;

// Large enough for any realistic payload through this API.
const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

pub fn router() -> Router {
    Router::new().route("/", get(health)).fallback(proxy)
}

async fn health() -> &'static str {
    "Gateway Service is up and running! Routes: /products, /partners, /inventory, /orders"
}

async fn proxy(Extension(proxy): Extension<Arc<Proxy>>, req: Request) -> Response {
    let (parts, body) = req.into_parts();
    let content_type = parts.headers.get(CONTENT_TYPE).cloned();
    let bytes = match to_bytes(body, MAX_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(_) => {
            return merx_core::json_error(
                axum::http::StatusCode::PAYLOAD_TOO_LARGE,
                "validation_error",
                "request body too large",
            );
        }
    };
    proxy
        .forward(parts.method, &parts.uri, content_type, bytes)
        .await
        .into_response()
}
