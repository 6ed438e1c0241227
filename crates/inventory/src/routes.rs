//! HTTP routes for the inventory ledger.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::Deserialize;

use merx_core::{Error, PageParams};

use crate::dto::AdjustStockRequest;
use crate::service::InventoryService;

pub fn router() -> Router {
    Router::new().nest(
        "/inventory",
        Router::new()
            .route("/health", get(health))
            .route("/", get(list_inventories))
            .route("/adjust", post(adjust_stock))
            .route("/history", get(get_history))
            .route("/:productId", get(get_inventory)),
    )
}

async fn health() -> &'static str {
    "Inventory Service is up and running!"
}

#[derive(Debug, Deserialize)]
struct PageQuery {
    page: Option<u32>,
    size: Option<u32>,
}

async fn list_inventories(
    Extension(service): Extension<Arc<InventoryService>>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, Error> {
    let params = PageParams::from_parts(query.page, query.size);
    Ok(Json(service.get_inventories(params).await?))
}

async fn adjust_stock(
    Extension(service): Extension<Arc<InventoryService>>,
    Json(body): Json<AdjustStockRequest>,
) -> Result<impl IntoResponse, Error> {
    service.adjust_stock(body).await?;
    Ok(StatusCode::OK)
}

async fn get_inventory(
    Extension(service): Extension<Arc<InventoryService>>,
    Path(product_id): Path<i64>,
) -> Result<impl IntoResponse, Error> {
    Ok(Json(service.get_inventory(product_id).await?))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HistoryQuery {
    product_id: Option<i64>,
    page: Option<u32>,
    size: Option<u32>,
}

async fn get_history(
    Extension(service): Extension<Arc<InventoryService>>,
    Query(query): Query<HistoryQuery>,
) -> Result<impl IntoResponse, Error> {
    let params = PageParams::from_parts(query.page, query.size);
    Ok(Json(service.get_history(query.product_id, params).await?))
}
