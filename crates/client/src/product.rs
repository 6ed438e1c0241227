//! Product catalog client.

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ClientError;
use crate::registry::{ServiceName, ServiceRegistry};

/// The slice of a product record other services care about: the current
/// price for order lines, name/category for display enrichment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    pub id: i64,
    pub name: String,
    pub sku: String,
    pub category: Option<String>,
    pub price: Decimal,
    pub status: Option<String>,
}

#[async_trait]
pub trait ProductApi: Send + Sync {
    async fn product_by_id(&self, id: i64) -> Result<ProductSummary, ClientError>;
}

pub struct HttpProductClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpProductClient {
    pub fn new(registry: &ServiceRegistry) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: registry.base_url(ServiceName::Product).to_string(),
        }
    }
}

#[async_trait]
impl ProductApi for HttpProductClient {
    async fn product_by_id(&self, id: i64) -> Result<ProductSummary, ClientError> {
        let url = format!("{}/products/{}", self.base_url, id);
        let res = self.http.get(&url).send().await?;
        if !res.status().is_success() {
            return Err(ClientError::Status {
                status: res.status().as_u16(),
                url,
            });
        }
        Ok(res.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_summary_decodes_decimal_prices() {
        let summary: ProductSummary = serde_json::from_str(
            r#"{"id":1,"name":"Widget","sku":"W-1","category":"Hardware","price":"10.00","status":"ACTIVE"}"#,
        )
        .unwrap();
        assert_eq!(summary.price, Decimal::new(1000, 2));
    }
}
