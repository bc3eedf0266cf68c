//! Runs against a live MongoDB. Set `MONGODB_URI` (and optionally
//! `MONGODB_DB`) and run with `--ignored`.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use mongodb::Client;
use mongodb::bson::{Document, doc};
use storefront::StoreError;
use storefront::core::config::AppConfig;
use storefront::core::models::{NewCategory, NewProduct, ProductPatch};
use storefront::storage::{ConnectionManager, MongoStorage, Storage};
use uuid::Uuid;

fn storage() -> (Arc<ConnectionManager>, MongoStorage) {
    let manager = Arc::new(ConnectionManager::from_env());
    (Arc::clone(&manager), MongoStorage::mongo(manager))
}

#[tokio::test(flavor = "multi_thread")]
#[ignore = "requires a running MongoDB at MONGODB_URI"]
async fn mongo_catalog_scenario() {
    let (manager, storage) = storage();
    let suffix = Uuid::new_v4().simple().to_string();
    let category_id = format!("cat-{suffix}");
    let product_id = format!("p-{suffix}");

    storage
        .create_category(NewCategory::new(&category_id, "Sarees", "Traditional sarees"))
        .await
        .unwrap();
    assert!(manager.is_connected());

    let created = storage
        .create_product(NewProduct::new(&product_id, &category_id, "Silk Saree", 1200.0))
        .await
        .unwrap();
    assert!(created.storage_id.is_some());

    let in_category = storage
        .get_products_by_category(&category_id)
        .await
        .unwrap();
    assert_eq!(in_category.len(), 1);
    assert_eq!(in_category[0].id, product_id);

    let patch = ProductPatch {
        price: Some(999.0),
        ..Default::default()
    };
    let updated = storage
        .update_product(&product_id, patch)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.price, 999.0);
    assert_eq!(updated.name, "Silk Saree");

    let duplicate = storage
        .create_product(NewProduct::new(&product_id, &category_id, "Copy", 1.0))
        .await;
    assert!(duplicate.is_err(), "unique id index should reject duplicates");

    assert!(storage.delete_product(&product_id).await.unwrap());
    assert!(!storage.delete_product(&product_id).await.unwrap());
    let gone = storage.get_product_by_id(&product_id).await.unwrap();
    assert!(gone.is_none());
    assert!(storage.delete_category(&category_id).await.unwrap());
}

#[tokio::test(flavor = "multi_thread")]
#[ignore = "requires a running MongoDB at MONGODB_URI"]
async fn connects_once_configuration_is_supplied() {
    let configured = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&configured);
    let manager = Arc::new(ConnectionManager::with_loader(move || {
        if flag.load(Ordering::SeqCst) {
            AppConfig::from_env()
        } else {
            Err(StoreError::Configuration("MONGODB_URI is not defined".into()))
        }
    }));
    let storage = MongoStorage::mongo(Arc::clone(&manager));

    let err = storage.get_all_categories().await.unwrap_err();
    assert!(matches!(err, StoreError::Configuration(_)), "got {err:?}");
    assert!(!manager.is_connected());

    configured.store(true, Ordering::SeqCst);
    storage.get_all_categories().await.unwrap();
    assert!(manager.is_connected());
}

#[tokio::test(flavor = "multi_thread")]
#[ignore = "requires a running MongoDB at MONGODB_URI"]
async fn failed_index_build_does_not_block_connecting() {
    let config = AppConfig::from_env().unwrap();
    let scratch = format!("storefront_dup_{}", Uuid::new_v4().simple());

    // Duplicate ids make the unique index build fail.
    let client = Client::with_uri_str(&config.mongodb_uri).await.unwrap();
    let database = client.database(&scratch);
    database
        .collection::<Document>("categories")
        .insert_many([
            doc! { "id": "dup", "name": "First", "description": "" },
            doc! { "id": "dup", "name": "Second", "description": "" },
        ])
        .await
        .unwrap();

    let scratch_name = scratch.clone();
    let manager = Arc::new(ConnectionManager::with_loader(move || {
        Ok(AppConfig {
            database: Some(scratch_name.clone()),
            ..config.clone()
        })
    }));
    let storage = MongoStorage::mongo(Arc::clone(&manager));

    let categories = storage.get_all_categories().await.unwrap();
    assert!(manager.is_connected());
    assert_eq!(categories.len(), 2);
    assert!(storage.get_category_by_id("dup").await.unwrap().is_some());

    database.drop().await.unwrap();
}
