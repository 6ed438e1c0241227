//! Logical service name -> base URL resolution.
//!
//! Discovery itself is out of scope; deployments inject the mapping through
//! `*_SERVICE_URL` environment variables, and local development falls back
//! to the conventional localhost ports.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceName {
    Product,
    Partner,
    Inventory,
    Order,
}

#[derive(Debug, Clone)]
pub struct ServiceRegistry {
    product: String,
    partner: String,
    inventory: String,
    order: String,
}

impl ServiceRegistry {
    /// Resolve base URLs from the environment, defaulting to localhost.
    pub fn from_env() -> Self {
        Self {
            product: env_or("PRODUCT_SERVICE_URL", "http://127.0.0.1:8081"),
            partner: env_or("PARTNER_SERVICE_URL", "http://127.0.0.1:8082"),
            inventory: env_or("INVENTORY_SERVICE_URL", "http://127.0.0.1:8083"),
            order: env_or("ORDER_SERVICE_URL", "http://127.0.0.1:8084"),
        }
    }

    /// Fixed mapping, used by tests pointing at ephemeral listeners.
    pub fn fixed(
        product: impl Into<String>,
        partner: impl Into<String>,
        inventory: impl Into<String>,
        order: impl Into<String>,
    ) -> Self {
        Self {
            product: product.into(),
            partner: partner.into(),
            inventory: inventory.into(),
            order: order.into(),
        }
    }

    pub fn base_url(&self, service: ServiceName) -> &str {
        match service {
            ServiceName::Product => &self.product,
            ServiceName::Partner => &self.partner,
            ServiceName::Inventory => &self.inventory,
            ServiceName::Order => &self.order,
        }
    }
}

fn env_or(var: &str, default: &str) -> String {
    let url = std::env::var(var).unwrap_or_else(|_| default.to_string());
    url.trim_end_matches('/').to_string()
}
