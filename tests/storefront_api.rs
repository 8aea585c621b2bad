use flatshop::api::routes::create_router;
use flatshop::store::JsonFileStore;
use reqwest::Client;
use serde_json::{json, Value};
use std::sync::Arc;

// Test client wrapper for making API calls
struct TestClient {
    client: Client,
    base_url: String,
}

impl TestClient {
    fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    async fn post(&self, path: &str, json: Value) -> reqwest::Result<reqwest::Response> {
        self.client
            .post(format!("{}{}", self.base_url, path))
            .json(&json)
            .send()
            .await
    }

    async fn put(&self, path: &str, json: Value) -> reqwest::Result<reqwest::Response> {
        self.client
            .put(format!("{}{}", self.base_url, path))
            .json(&json)
            .send()
            .await
    }

    async fn get(&self, path: &str) -> reqwest::Result<reqwest::Response> {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await
    }

    async fn delete(&self, path: &str) -> reqwest::Result<reqwest::Response> {
        self.client
            .delete(format!("{}{}", self.base_url, path))
            .send()
            .await
    }
}

/// Spins up the full router over a scratch data directory on an ephemeral
/// port. The TempDir must stay alive for the duration of the test.
async fn spawn_server() -> (TestClient, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());
    store.initialize().await.unwrap();

    let app = create_router().with_state(Arc::new(store));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (TestClient::new(format!("http://{addr}")), dir)
}

#[tokio::test]
async fn test_storefront_complete_workflow() {
    let (client, _dir) = spawn_server().await;

    println!("1. Health check...");
    let resp = client.get("/health").await.unwrap();
    assert_eq!(resp.status(), 200);

    println!("2. Creating category and brand...");
    let resp = client
        .post("/categories", json!({"name": "Shoes", "description": "Footwear"}))
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
    let category: Value = resp.json::<Value>().await.unwrap()["data"].clone();
    assert_eq!(category["documentId"], "cat1");
    assert_eq!(category["slug"], "shoes");

    let resp = client.post("/brands", json!({"name": "Nike"})).await.unwrap();
    assert_eq!(resp.status(), 201);
    let brand: Value = resp.json::<Value>().await.unwrap()["data"].clone();
    assert_eq!(brand["documentId"], "brand1");

    println!("3. Creating products with embedded snapshots...");
    let resp = client
        .post(
            "/products",
            json!({
                "name": "Air Max",
                "price": 2_000_000,
                "description": "A classic runner",
                "category": category,
                "brand": brand
            }),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
    let product: Value = resp.json::<Value>().await.unwrap()["data"].clone();
    assert_eq!(product["documentId"], "1");
    assert_eq!(product["slug"], "air-max");
    assert_eq!(product["status"], "active");

    let resp = client
        .post(
            "/products",
            json!({"name": "Court Vision", "price": 8_000_000, "category": category}),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);

    println!("4. Duplicate slug is rejected...");
    let resp = client
        .post("/products", json!({"name": "Air Max", "price": 1}))
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("slug"));

    println!("5. Filtered listing...");
    let resp = client
        .get("/products?category=shoes&brand=brand1")
        .await
        .unwrap();
    let page: Value = resp.json().await.unwrap();
    assert_eq!(page["meta"]["pagination"]["total"], 1);
    assert_eq!(page["data"][0]["slug"], "air-max");

    let resp = client
        .get("/products?priceRange=50-100&sortBy=price-asc")
        .await
        .unwrap();
    let page: Value = resp.json().await.unwrap();
    assert_eq!(page["meta"]["pagination"]["total"], 1);
    assert_eq!(page["data"][0]["slug"], "court-vision");

    println!("6. Lookup by slug, update preserves identifier...");
    let resp = client.get("/products/air-max").await.unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"][0]["documentId"], "1");

    let resp = client
        .put("/products/1", json!({"documentId": "99", "price": 1_500_000}))
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["documentId"], "1");
    assert_eq!(body["data"]["price"], 1_500_000);

    println!("7. Snapshot embedding survives category edits...");
    let resp = client
        .put("/categories/cat1", json!({"name": "Sneakers"}))
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let resp = client.get("/products/air-max").await.unwrap();
    let body: Value = resp.json().await.unwrap();
    // The product still embeds the category as it was at write time.
    assert_eq!(body["data"][0]["category"]["name"], "Shoes");

    println!("8. Brand listing narrowed by category...");
    let resp = client.get("/brands?category=shoes").await.unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["brands"].as_array().unwrap().len(), 1);

    println!("9. Delete and 404...");
    let resp = client.delete("/products/2").await.unwrap();
    assert_eq!(resp.status(), 200);
    let resp = client.get("/products/2").await.unwrap();
    assert_eq!(resp.status(), 404);

    println!("✅ storefront workflow complete");
}

#[tokio::test]
async fn test_pagination_over_http() {
    let (client, _dir) = spawn_server().await;

    for i in 1..=7 {
        let resp = client
            .post("/products", json!({"name": format!("Product {i}"), "price": i * 1000}))
            .await
            .unwrap();
        assert_eq!(resp.status(), 201);
    }

    // Last page holds the remainder.
    let resp = client.get("/products?page=3&pageSize=3").await.unwrap();
    let page: Value = resp.json().await.unwrap();
    assert_eq!(page["data"].as_array().unwrap().len(), 1);
    assert_eq!(page["meta"]["pagination"]["pageCount"], 3);
    assert_eq!(page["meta"]["pagination"]["total"], 7);

    // One past the last page is empty, not an error.
    let resp = client.get("/products?page=4&pageSize=3").await.unwrap();
    let page: Value = resp.json().await.unwrap();
    assert_eq!(page["data"].as_array().unwrap().len(), 0);

    // Page size may exceed the collection.
    let resp = client.get("/products?pageSize=1000").await.unwrap();
    let page: Value = resp.json().await.unwrap();
    assert_eq!(page["data"].as_array().unwrap().len(), 7);
    assert_eq!(page["meta"]["pagination"]["pageCount"], 1);

    // Articles are empty: pageCount is 0 by convention.
    let resp = client.get("/articles").await.unwrap();
    let page: Value = resp.json().await.unwrap();
    assert_eq!(page["meta"]["pagination"]["pageCount"], 0);
    assert_eq!(page["meta"]["pagination"]["total"], 0);
}

#[tokio::test]
async fn test_order_checkout_flow() {
    let (client, _dir) = spawn_server().await;

    println!("1. Invalid submissions are rejected...");
    let resp = client
        .post("/orders", json!({"items": [], "customer": {"fullName": "Jo"}}))
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    let resp = client
        .post(
            "/orders",
            json!({
                "items": [{"documentId": "1", "name": "Air Max", "price": 100_000, "quantity": 2}],
                "customer": {"fullName": "Jo Bloggs", "email": "jo@example.com"}
            }),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    println!("2. Valid submission computes the total...");
    let resp = client
        .post(
            "/orders",
            json!({
                "items": [
                    {"documentId": "1", "name": "Air Max", "price": 100_000, "quantity": 2},
                    {"documentId": "2", "name": "Cap", "price": 50_000, "quantity": 1}
                ],
                "customer": {
                    "fullName": "Jo Bloggs",
                    "email": "jo@example.com",
                    "phone": "5551234",
                    "address": "1 Main St",
                    "note": "leave at door"
                }
            }),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], true);
    let order_id = body["orderId"].as_str().unwrap().to_string();
    assert!(order_id.starts_with("ORD-"));

    println!("3. Listing and lookup...");
    let resp = client.get("/orders").await.unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["meta"]["total"], 1);
    assert_eq!(body["data"][0]["total"], 250_000);
    assert_eq!(body["data"][0]["status"], "pending");
    assert_eq!(body["data"][0]["note"], "leave at door");

    let resp = client.get(&format!("/orders/{order_id}")).await.unwrap();
    assert_eq!(resp.status(), 200);

    println!("4. Cancelling forces the status...");
    let resp = client
        .put(&format!("/orders/{order_id}"), json!({"cancelled": true, "paid": false}))
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["order"]["status"], "cancelled");
    assert_eq!(body["order"]["cancelled"], true);

    println!("5. Deletion...");
    let resp = client.delete(&format!("/orders/{order_id}")).await.unwrap();
    assert_eq!(resp.status(), 200);
    let resp = client.delete(&format!("/orders/{order_id}")).await.unwrap();
    assert_eq!(resp.status(), 404);

    println!("✅ order checkout flow complete");
}
