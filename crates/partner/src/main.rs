use std::sync::Arc;

use anyhow::Context;
use sqlx::PgPool;

use merx_core::SystemClock;
use merx_partner::service::PartnerService;
use merx_partner::store::{PgPartnerStore, postgres};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    merx_observability::init("partner-service");

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL not set")?;
    let pool = PgPool::connect(&database_url)
        .await
        .context("failed to connect to database")?;
    postgres::ensure_schema(&pool)
        .await
        .map_err(|e| anyhow::anyhow!("failed to create schema: {e}"))?;

    let store = Arc::new(PgPartnerStore::new(pool));
    let service = Arc::new(PartnerService::new(store, Arc::new(SystemClock)));
    let app = merx_partner::build_app(service);

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8082".to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
