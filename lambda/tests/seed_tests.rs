use std::sync::Arc;

use serde_json::Value;
use storefront::StoreError;
use storefront::api::seed::{SEED_FAILURE_MESSAGE, SEED_SUCCESS_MESSAGE, run_seed};
use storefront::seed::{initial_categories, initial_products, seed_database};
use storefront::storage::{ConnectionManager, MemoryStorage, MongoStorage, Storage};

fn body(response: &Value) -> Value {
    let raw = response["body"].as_str().expect("body should be a JSON string");
    serde_json::from_str(raw).unwrap()
}

#[tokio::test]
async fn seed_inserts_initial_catalog() {
    let storage = MemoryStorage::in_memory();

    let report = seed_database(&storage).await.unwrap();
    assert_eq!(report.categories_created, initial_categories().len());
    assert_eq!(report.products_created, initial_products().len());
    assert_eq!(report.skipped, 0);

    assert_eq!(
        storage.get_all_categories().await.unwrap().len(),
        initial_categories().len()
    );
    assert_eq!(
        storage.get_all_products().await.unwrap().len(),
        initial_products().len()
    );
}

#[tokio::test]
async fn seed_products_reference_seeded_categories() {
    let storage = MemoryStorage::in_memory();
    seed_database(&storage).await.unwrap();

    for product in storage.get_all_products().await.unwrap() {
        assert!(
            storage
                .get_category_by_id(&product.category_id)
                .await
                .unwrap()
                .is_some(),
            "product {} points at missing category {}",
            product.id,
            product.category_id
        );
    }
}

#[tokio::test]
async fn reseeding_skips_existing_records() {
    let storage = MemoryStorage::in_memory();
    seed_database(&storage).await.unwrap();

    let report = seed_database(&storage).await.unwrap();
    assert_eq!(report.categories_created, 0);
    assert_eq!(report.products_created, 0);
    assert_eq!(
        report.skipped,
        initial_categories().len() + initial_products().len()
    );
    assert_eq!(
        storage.get_all_products().await.unwrap().len(),
        initial_products().len()
    );
}

#[tokio::test]
async fn seed_function_success_response() {
    let storage = MemoryStorage::in_memory();

    let response = run_seed(&storage).await;
    assert_eq!(response["statusCode"], 200);

    let body = body(&response);
    assert_eq!(body["message"], SEED_SUCCESS_MESSAGE);
    assert_eq!(body["success"], true);
    assert!(body.get("error").is_none());
}

#[tokio::test]
async fn seed_function_failure_response() {
    let manager = ConnectionManager::with_loader(|| {
        Err(StoreError::Configuration("MONGODB_URI is not defined".to_string()))
    });
    let storage = MongoStorage::mongo(Arc::new(manager));

    let response = run_seed(&storage).await;
    assert_eq!(response["statusCode"], 500);

    let body = body(&response);
    assert_eq!(body["message"], SEED_FAILURE_MESSAGE);
    assert_eq!(body["success"], false);
    assert!(
        body["error"]
            .as_str()
            .unwrap()
            .contains("MONGODB_URI is not defined")
    );
}
