//! HTTP routes for order processing.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
};
use serde::Deserialize;

use merx_core::{Error, PageParams};

use crate::dto::{CreateOrderRequest, UpdateStatusRequest};
use crate::service::OrderService;

pub fn router() -> Router {
    Router::new().nest(
        "/orders",
        Router::new()
            .route("/health", get(health))
            .route("/", get(list_orders).post(create_order))
            .route("/:id", get(get_order))
            .route("/:id/status", put(update_status)),
    )
}

async fn health() -> &'static str {
    "Order Service is up and running!"
}

#[derive(Debug, Deserialize)]
struct ListQuery {
    keyword: Option<String>,
    page: Option<u32>,
    size: Option<u32>,
}

async fn list_orders(
    Extension(service): Extension<Arc<OrderService>>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, Error> {
    let params = PageParams::from_parts(query.page, query.size);
    let page = service.get_orders(query.keyword.as_deref(), params).await?;
    Ok(Json(page))
}

async fn get_order(
    Extension(service): Extension<Arc<OrderService>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, Error> {
    Ok(Json(service.get_order(id).await?))
}

async fn create_order(
    Extension(service): Extension<Arc<OrderService>>,
    Json(body): Json<CreateOrderRequest>,
) -> Result<impl IntoResponse, Error> {
    let created = service.create_order(body).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update_status(
    Extension(service): Extension<Arc<OrderService>>,
    Path(id): Path<i64>,
    Json(body): Json<UpdateStatusRequest>,
) -> Result<impl IntoResponse, Error> {
    Ok(Json(service.update_status(id, &body.status).await?))
}
