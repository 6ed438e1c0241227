//! Black-box HTTP tests: real router, ephemeral port, in-memory store and
//! stubbed collaborators.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use reqwest::StatusCode;
use rust_decimal::Decimal;
use serde_json::json;

use merx_client::{
    ClientError, InventoryApi, PartnerApi, PartnerSummary, ProductApi, ProductSummary,
    StockAdjustment,
};
use merx_core::FixedClock;
use merx_order::number::TimestampOrderNumbers;
use merx_order::service::OrderService;
use merx_order::store::MemoryOrderStore;

struct StubPartners(HashMap<i64, PartnerSummary>);

#[async_trait]
impl PartnerApi for StubPartners {
    async fn partner_by_id(&self, id: i64) -> Result<PartnerSummary, ClientError> {
        self.0.get(&id).cloned().ok_or(ClientError::Status {
            status: 404,
            url: format!("/partners/{id}"),
        })
    }
}

struct StubProducts(HashMap<i64, ProductSummary>);

#[async_trait]
impl ProductApi for StubProducts {
    async fn product_by_id(&self, id: i64) -> Result<ProductSummary, ClientError> {
        self.0.get(&id).cloned().ok_or(ClientError::Status {
            status: 404,
            url: format!("/products/{id}"),
        })
    }
}

struct AcceptingInventory;

#[async_trait]
impl InventoryApi for AcceptingInventory {
    async fn adjust_stock(&self, _adjustment: StockAdjustment) -> Result<(), ClientError> {
        Ok(())
    }
}

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(
        partners: HashMap<i64, PartnerSummary>,
        products: HashMap<i64, ProductSummary>,
    ) -> Self {
        let clock = Arc::new(FixedClock(
            Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
        ));
        let service = Arc::new(OrderService::new(
            Arc::new(MemoryOrderStore::new()),
            Arc::new(StubPartners(partners)),
            Arc::new(StubProducts(products)),
            Arc::new(AcceptingInventory),
            Arc::new(TimestampOrderNumbers::new(clock.clone())),
            clock,
        ));
        let app = merx_order::build_app(service);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn partner(id: i64, name: &str) -> PartnerSummary {
    PartnerSummary {
        id,
        name: name.to_owned(),
        kind: "Customer".to_owned(),
        status: Some("Active".to_owned()),
    }
}

fn product(id: i64, name: &str, price: Decimal) -> ProductSummary {
    ProductSummary {
        id,
        name: name.to_owned(),
        sku: format!("SKU-{id}"),
        category: None,
        price,
        status: Some("ACTIVE".to_owned()),
    }
}

fn catalog() -> (HashMap<i64, PartnerSummary>, HashMap<i64, ProductSummary>) {
    let partners = HashMap::from([(7, partner(7, "Acme Logistics"))]);
    let products = HashMap::from([
        (1, product(1, "Widget", Decimal::new(1000, 2))),
        (2, product(2, "Bolt", Decimal::new(500, 2))),
    ]);
    (partners, products)
}

#[tokio::test]
async fn health_endpoint_responds() {
    let (partners, products) = catalog();
    let server = TestServer::spawn(partners, products).await;

    let res = reqwest::get(format!("{}/orders/health", server.base_url))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.text().await.unwrap(), "Order Service is up and running!");
}

#[tokio::test]
async fn create_then_fetch_and_update_status() {
    let (partners, products) = catalog();
    let server = TestServer::spawn(partners, products).await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/orders/", server.base_url))
        .json(&json!({
            "partnerId": 7,
            "shippingAddress": "1 Main St",
            "items": [
                { "productId": 1, "quantity": 3 },
                { "productId": 2, "quantity": 1 }
            ]
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let created: serde_json::Value = res.json().await.unwrap();
    assert_eq!(created["status"], "PENDING");
    assert_eq!(created["totalAmount"], "35.00");
    assert_eq!(created["partnerName"], "Acme Logistics");
    assert_eq!(created["items"].as_array().unwrap().len(), 2);
    assert_eq!(created["items"][0]["subTotal"], "30.00");
    assert!(created["orderNumber"].as_str().unwrap().starts_with("ORD-"));
    let id = created["id"].as_i64().unwrap();

    let fetched: serde_json::Value = client
        .get(format!("{}/orders/{id}", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched["items"][1]["productName"], "Bolt");

    let res = client
        .put(format!("{}/orders/{id}/status", server.base_url))
        .json(&json!({ "status": "SHIPPED" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let updated: serde_json::Value = res.json().await.unwrap();
    assert_eq!(updated["status"], "SHIPPED");
}

#[tokio::test]
async fn unknown_partner_is_a_json_404() {
    let (_, products) = catalog();
    let server = TestServer::spawn(HashMap::new(), products).await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/orders/", server.base_url))
        .json(&json!({
            "partnerId": 99,
            "items": [{ "productId": 1, "quantity": 1 }]
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "not_found");

    // Nothing was persisted.
    let page: serde_json::Value = client
        .get(format!("{}/orders/", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(page["totalElements"], 0);
}

#[tokio::test]
async fn list_filters_by_order_number_keyword() {
    let (partners, products) = catalog();
    let server = TestServer::spawn(partners, products).await;
    let client = reqwest::Client::new();

    let created: serde_json::Value = client
        .post(format!("{}/orders/", server.base_url))
        .json(&json!({
            "partnerId": 7,
            "items": [{ "productId": 1, "quantity": 1 }]
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let number = created["orderNumber"].as_str().unwrap().to_lowercase();

    let page: serde_json::Value = client
        .get(format!("{}/orders/?keyword={number}", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(page["totalElements"], 1);
    assert_eq!(page["content"][0]["orderNumber"].as_str().unwrap().to_lowercase(), number);

    let none: serde_json::Value = client
        .get(format!("{}/orders/?keyword=NO-SUCH", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(none["totalElements"], 0);
}
