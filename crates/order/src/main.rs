use std::sync::Arc;

use anyhow::Context;
use sqlx::PgPool;

use merx_client::{HttpInventoryClient, HttpPartnerClient, HttpProductClient, ServiceRegistry};
use merx_core::SystemClock;
use merx_order::number::TimestampOrderNumbers;
use merx_order::service::OrderService;
use merx_order::store::{PgOrderStore, postgres};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    merx_observability::init("order-service");

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL not set")?;
    let pool = PgPool::connect(&database_url)
        .await
        .context("failed to connect to database")?;
    postgres::ensure_schema(&pool)
        .await
        .map_err(|e| anyhow::anyhow!("failed to create schema: {e}"))?;

    let registry = ServiceRegistry::from_env();
    let clock = Arc::new(SystemClock);
    let store = Arc::new(PgOrderStore::new(pool));
    let service = Arc::new(OrderService::new(
        store,
        Arc::new(HttpPartnerClient::new(&registry)),
        Arc::new(HttpProductClient::new(&registry)),
        Arc::new(HttpInventoryClient::new(&registry)),
        Arc::new(TimestampOrderNumbers::new(clock.clone())),
        clock,
    ));
    let app = merx_order::build_app(service);

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8084".to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
