use serde_json::{Value, json};
use storefront::api::handler::route;
use storefront::core::models::{NewCategory, NewProduct};
use storefront::storage::{MemoryStorage, Storage};

async fn catalog() -> MemoryStorage {
    let storage = MemoryStorage::in_memory();
    storage
        .create_category(NewCategory::new("cat1", "Sarees", "Traditional sarees"))
        .await
        .unwrap();
    storage
        .create_category(NewCategory::new("cat 2", "Dupattas", "Light drapes"))
        .await
        .unwrap();
    storage
        .create_product(NewProduct::new("p1", "cat1", "Silk Saree", 1200.0))
        .await
        .unwrap();
    storage
        .create_product(NewProduct::new("p2", "cat 2", "Chiffon Dupatta", 450.0))
        .await
        .unwrap();
    storage
}

fn get(path: &str) -> Value {
    json!({ "rawPath": path, "requestContext": { "http": { "method": "GET" } } })
}

fn body(response: &Value) -> Value {
    let raw = response["body"].as_str().unwrap();
    serde_json::from_str(raw).unwrap()
}

fn ids(body: &Value) -> Vec<&str> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|v| v["id"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn lists_categories_for_navigation() {
    let storage = catalog().await;

    let response = route(&storage, &get("/api/categories")).await;
    assert_eq!(response["statusCode"], 200);
    assert_eq!(response["headers"]["Content-Type"], "application/json");

    let body = body(&response);
    assert_eq!(ids(&body), vec!["cat1", "cat 2"]);
    assert_eq!(body[0]["name"], "Sarees");
    assert_eq!(body[0]["description"], "Traditional sarees");
}

#[tokio::test]
async fn gets_single_category_and_product() {
    let storage = catalog().await;

    let response = route(&storage, &get("/api/categories/cat1")).await;
    assert_eq!(response["statusCode"], 200);
    assert_eq!(body(&response)["name"], "Sarees");

    let response = route(&storage, &get("/api/products/p1")).await;
    assert_eq!(response["statusCode"], 200);
    let product = body(&response);
    assert_eq!(product["categoryId"], "cat1");
    assert_eq!(product["price"], 1200.0);
}

#[tokio::test]
async fn missing_entities_are_404() {
    let storage = catalog().await;

    let response = route(&storage, &get("/api/products/nope")).await;
    assert_eq!(response["statusCode"], 404);
    assert_eq!(body(&response)["error"], "Product not found: nope");

    let response = route(&storage, &get("/api/categories/nope")).await;
    assert_eq!(response["statusCode"], 404);
}

#[tokio::test]
async fn filters_products_by_category() {
    let storage = catalog().await;

    let mut request = get("/api/products");
    request["queryStringParameters"] = json!({ "categoryId": "cat1" });
    let response = route(&storage, &request).await;
    assert_eq!(ids(&body(&response)), vec!["p1"]);

    let response = route(&storage, &get("/api/categories/cat%202/products")).await;
    assert_eq!(ids(&body(&response)), vec!["p2"]);

    let response = route(&storage, &get("/api/products")).await;
    assert_eq!(ids(&body(&response)), vec!["p1", "p2"]);

    let response = route(&storage, &get("/api/categories/empty/products")).await;
    assert_eq!(response["statusCode"], 200);
    assert!(body(&response).as_array().unwrap().is_empty());
}

#[tokio::test]
async fn accepts_netlify_function_paths() {
    let storage = catalog().await;

    let request = json!({ "path": "/.netlify/functions/api/products/p2", "httpMethod": "GET" });
    let response = route(&storage, &request).await;
    assert_eq!(response["statusCode"], 200);
    assert_eq!(body(&response)["id"], "p2");
}

#[tokio::test]
async fn rejects_writes_and_unknown_routes() {
    let storage = catalog().await;

    let request = json!({
        "rawPath": "/api/products",
        "requestContext": { "http": { "method": "POST" } }
    });
    assert_eq!(route(&storage, &request).await["statusCode"], 405);

    assert_eq!(route(&storage, &get("/api/orders")).await["statusCode"], 404);
    assert_eq!(route(&storage, &get("/health")).await["statusCode"], 404);
    assert_eq!(route(&storage, &json!({})).await["statusCode"], 400);

    assert_eq!(storage.get_all_products().await.unwrap().len(), 2);
}
