//! HTTP routes for the product catalog.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::Deserialize;

use merx_core::{Error, PageParams};

use crate::dto::{CreateProductRequest, UpdateProductRequest};
use crate::service::ProductService;
use crate::store::ProductFilter;

pub fn router() -> Router {
    Router::new().nest(
        "/products",
        Router::new()
            .route("/health", get(health))
            .route("/", get(list_products).post(create_product))
            .route(
                "/:id",
                get(get_product).put(update_product).delete(delete_product),
            ),
    )
}

async fn health() -> &'static str {
    "Product Service is up and running!"
}

#[derive(Debug, Deserialize)]
struct ListQuery {
    keyword: Option<String>,
    category: Option<String>,
    status: Option<String>,
    page: Option<u32>,
    size: Option<u32>,
}

async fn list_products(
    Extension(service): Extension<Arc<ProductService>>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, Error> {
    let filter = ProductFilter {
        keyword: query.keyword,
        category: query.category,
        status: query.status,
    };
    let params = PageParams::from_parts(query.page, query.size);
    let page = service.get_products(filter, params).await?;
    Ok(Json(page))
}

async fn get_product(
    Extension(service): Extension<Arc<ProductService>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, Error> {
    Ok(Json(service.get_product(id).await?))
}

async fn create_product(
    Extension(service): Extension<Arc<ProductService>>,
    Json(body): Json<CreateProductRequest>,
) -> Result<impl IntoResponse, Error> {
    let created = service.create_product(body).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update_product(
    Extension(service): Extension<Arc<ProductService>>,
    Path(id): Path<i64>,
    Json(body): Json<UpdateProductRequest>,
) -> Result<impl IntoResponse, Error> {
    Ok(Json(service.update_product(id, body).await?))
}

async fn delete_product(
    Extension(service): Extension<Arc<ProductService>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, Error> {
    service.delete_product(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
