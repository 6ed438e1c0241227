//! Pass-through proxy core.
//!
//! The gateway owns no business logic. It maps the first path segment to a
//! backing service, replays the request there (method, path, query, body),
//! and hands the upstream status and body back verbatim.

use axum::body::{Body, Bytes};
use axum::http::{HeaderValue, Method, StatusCode, Uri, header::CONTENT_TYPE};
use axum::response::Response;
use tracing::{debug, warn};

use merx_client::{ServiceName, ServiceRegistry};
use merx_core::json_error;

pub struct Proxy {
    http: reqwest::Client,
    registry: ServiceRegistry,
}

impl Proxy {
    pub fn new(registry: ServiceRegistry) -> Self {
        Self {
            http: reqwest::Client::new(),
            registry,
        }
    }

    /// Routes on the first path segment. `None` means no backing service
    /// owns this prefix.
    fn route(path: &str) -> Option<ServiceName> {
        match path.trim_start_matches('/').split('/').next() {
            Some("products") => Some(ServiceName::Product),
            Some("partners") => Some(ServiceName::Partner),
            Some("inventory") => Some(ServiceName::Inventory),
            Some("orders") => Some(ServiceName::Order),
            _ => None,
        }
    }

    pub async fn forward(
        &self,
        method: Method,
        uri: &Uri,
        content_type: Option<HeaderValue>,
        body: Bytes,
    ) -> Response {
        let Some(service) = Self::route(uri.path()) else {
            return json_error(
                StatusCode::NOT_FOUND,
                "not_found",
                format!("no service owns {}", uri.path()),
            );
        };

        let mut url = format!("{}{}", self.registry.base_url(service), uri.path());
        if let Some(query) = uri.query() {
            url.push('?');
            url.push_str(query);
        }
        debug!(%method, %url, "forwarding");

        let mut upstream = self.http.request(method, &url);
        if let Some(value) = content_type {
            upstream = upstream.header(CONTENT_TYPE, value);
        }
        let res = match upstream.body(body).send().await {
            Ok(res) => res,
            Err(e) => {
                warn!(%url, error = %e, "upstream unreachable");
                return json_error(
                    StatusCode::BAD_GATEWAY,
                    "upstream_error",
                    format!("upstream unreachable: {url}"),
                );
            }
        };

        let status = res.status();
        let upstream_content_type = res.headers().get(CONTENT_TYPE).cloned();
        let bytes = match res.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(%url, error = %e, "upstream body read failed");
                return json_error(
                    StatusCode::BAD_GATEWAY,
                    "upstream_error",
                    format!("upstream body read failed: {url}"),
                );
            }
        };

        let mut builder = Response::builder().status(status);
        if let Some(value) = upstream_content_type {
            builder = builder.header(CONTENT_TYPE, value);
        }
        // Infallible with a valid status and header value.
        builder.body(Body::from(bytes)).unwrap_or_else(|_| {
            json_error(
                StatusCode::BAD_GATEWAY,
                "upstream_error",
                "failed to relay upstream response",
            )
        })
    }
}
