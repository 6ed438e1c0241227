//! Inventory ledger client.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ClientError;
use crate::registry::{ServiceName, ServiceRegistry};

/// Body of `POST /inventory/adjust`: a signed delta plus audit fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockAdjustment {
    pub product_id: i64,
    pub quantity_changed: i32,
    pub reason: Option<String>,
    pub reference_id: Option<String>,
}

#[async_trait]
pub trait InventoryApi: Send + Sync {
    async fn adjust_stock(&self, adjustment: StockAdjustment) -> Result<(), ClientError>;
}

pub struct HttpInventoryClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpInventoryClient {
    pub fn new(registry: &ServiceRegistry) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: registry.base_url(ServiceName::Inventory).to_string(),
        }
    }
}

#[async_trait]
impl InventoryApi for HttpInventoryClient {
    async fn adjust_stock(&self, adjustment: StockAdjustment) -> Result<(), ClientError> {
        let url = format!("{}/inventory/adjust", self.base_url);
        let res = self.http.post(&url).json(&adjustment).send().await?;
        if !res.status().is_success() {
            return Err(ClientError::Status {
                status: res.status().as_u16(),
                url,
            });
        }
        Ok(())
    }
}
