//! Partner directory client.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ClientError;
use crate::registry::{ServiceName, ServiceRegistry};

/// The slice of a partner record other services care about.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerSummary {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: Option<String>,
}

#[async_trait]
pub trait PartnerApi: Send + Sync {
    async fn partner_by_id(&self, id: i64) -> Result<PartnerSummary, ClientError>;
}

pub struct HttpPartnerClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpPartnerClient {
    pub fn new(registry: &ServiceRegistry) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: registry.base_url(ServiceName::Partner).to_string(),
        }
    }
}

#[async_trait]
impl PartnerApi for HttpPartnerClient {
    async fn partner_by_id(&self, id: i64) -> Result<PartnerSummary, ClientError> {
        let url = format!("{}/partners/{}", self.base_url, id);
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
    fn partner_summary_decodes_the_wire_shape() {
        let summary: PartnerSummary = serde_json::from_str(
            r#"{"id":7,"name":"Acme Logistics","type":"Logistics","status":"Active"}"#,
        )
        .unwrap();
        assert_eq!(summary.id, 7);
        assert_eq!(summary.kind, "Logistics");
    }
}
