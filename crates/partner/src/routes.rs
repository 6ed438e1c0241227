//! HTTP routes for the partner directory.

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

use crate::dto::PartnerRequest;
use crate::service::PartnerService;
use crate::store::PartnerFilter;

pub fn router() -> Router {
    Router::new().nest(
        "/partners",
        Router::new()
            .route("/health", get(health))
            .route("/", get(list_partners).post(create_partner))
            .route(
                "/:id",
                get(get_partner).put(update_partner).delete(delete_partner),
            ),
    )
}

async fn health() -> &'static str {
    "Partner Service is up and running!"
}

#[derive(Debug, Deserialize)]
struct ListQuery {
    keyword: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
    page: Option<u32>,
    size: Option<u32>,
}

async fn list_partners(
    Extension(service): Extension<Arc<PartnerService>>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, Error> {
    let filter = PartnerFilter {
        keyword: query.keyword,
        kind: query.kind,
    };
    let params = PageParams::from_parts(query.page, query.size);
    let page = service.get_partners(filter, params).await?;
    Ok(Json(page))
}

async fn get_partner(
    Extension(service): Extension<Arc<PartnerService>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, Error> {
    Ok(Json(service.get_partner(id).await?))
}

async fn create_partner(
    Extension(service): Extension<Arc<PartnerService>>,
    Json(body): Json<PartnerRequest>,
) -> Result<impl IntoResponse, Error> {
    let created = service.create_partner(body).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update_partner(
    Extension(service): Extension<Arc<PartnerService>>,
    Path(id): Path<i64>,
    Json(body): Json<PartnerRequest>,
) -> Result<impl IntoResponse, Error> {
    Ok(Json(service.update_partner(id, body).await?))
}

async fn delete_partner(
    Extension(service): Extension<Arc<PartnerService>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, Error> {
    service.delete_partner(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
