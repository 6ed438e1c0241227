use std::sync::Arc;

use anyhow::Context;
use sqlx::PgPool;

use merx_client::{HttpProductClient, ServiceRegistry};
use merx_core::SystemClock;
use merx_inventory::service::InventoryService;
use merx_inventory::store::{PgInventoryStore, postgres};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    merx_observability::init("inventory-service");

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL not set")?;
    let pool = PgPool::connect(&database_url)
        .await
        .context("failed to connect to database")?;
    postgres::ensure_schema(&pool)
        .await
        .map_err(|e| anyhow::anyhow!("failed to create schema: {e}"))?;

    let registry = ServiceRegistry::from_env();
    let store = Arc::new(PgInventoryStore::new(pool));
    let products = Arc::new(HttpProductClient::new(&registry));
    let service = Arc::new(InventoryService::new(store, products, Arc::new(SystemClock)));
    let app = merx_inventory::build_app(service);

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8083".to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
