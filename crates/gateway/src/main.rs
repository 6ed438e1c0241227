use std::sync::Arc;

use anyhow::Context;

use merx_client::ServiceRegistry;
use merx_gateway::proxy::Proxy;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    merx_observability::init("gateway-service");

    let registry = ServiceRegistry::from_env();
    let app = merx_gateway::build_app(Arc::new(Proxy::new(registry)));

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
