//! Black-box HTTP tests: real router, ephemeral port, in-memory store.

use std::sync::Arc;

use reqwest::StatusCode;
use serde_json::json;

use merx_core::SystemClock;
use merx_partner::service::PartnerService;
use merx_partner::store::MemoryPartnerStore;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        let store = Arc::new(MemoryPartnerStore::new());
        let service = Arc::new(PartnerService::new(store, Arc::new(SystemClock)));
        let app = merx_partner::build_app(service);

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

#[tokio::test]
async fn health_returns_plain_text() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/partners/health", srv.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.text().await.unwrap().contains("Partner Service"));
}

#[tokio::test]
async fn partner_crud_lifecycle() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    // Create.
    let res = client
        .post(format!("{}/partners/", srv.base_url))
        .json(&json!({
            "name": "Acme Corp",
            "type": "Customer",
            "email": "hello@acme.example"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let created: serde_json::Value = res.json().await.unwrap();
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["status"], "Active");

    // Read back.
    let res = client
        .get(format!("{}/partners/{}", srv.base_url, id))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let fetched: serde_json::Value = res.json().await.unwrap();
    assert_eq!(fetched["name"], "Acme Corp");
    assert_eq!(fetched["type"], "Customer");

    // List with type filter.
    let res = client
        .get(format!("{}/partners/?type=Customer", srv.base_url))
        .send()
        .await
        .unwrap();
    let page: serde_json::Value = res.json().await.unwrap();
    assert_eq!(page["totalElements"], 1);
    assert_eq!(page["content"][0]["id"], id);

    // Soft delete, then the partner is gone from the API.
    let res = client
        .delete(format!("{}/partners/{}", srv.base_url, id))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = client
        .get(format!("{}/partners/{}", srv.base_url, id))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn unknown_partner_is_a_json_404() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/partners/12345", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "not_found");
    assert!(body["message"].as_str().unwrap().contains("12345"));
}
