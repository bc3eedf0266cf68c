//! Catalog data access.
//!
//! `ProductRepository` and `CategoryRepository` are the per-kind CRUD
//! contracts. `Storage` is the single facade handlers and the seeder depend
//! on; `StorageFacade` satisfies it by delegating to one repository of each
//! kind. Two backends exist:
//!
//! - `MongoStorage`: MongoDB through a lazily opened `ConnectionManager`
//! - `MemoryStorage`: process-local, for tests and local runs
//!
//! Lookups key on the application `id`, never the store's `_id`. A product's
//! `categoryId` is not checked against existing categories.

pub mod connection;
pub mod entity;
pub mod memory;
pub mod mongo;

use std::sync::Arc;

use async_trait::async_trait;

use crate::core::models::{Category, CategoryPatch, NewCategory, NewProduct, Product, ProductPatch};
use crate::errors::StoreResult;

pub use connection::ConnectionManager;
pub use memory::MemoryRepository;
pub use mongo::MongoRepository;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn list_all(&self) -> StoreResult<Vec<Category>>;
    async fn get_by_id(&self, id: &str) -> StoreResult<Option<Category>>;
    async fn create(&self, data: NewCategory) -> StoreResult<Category>;
    async fn update(&self, id: &str, patch: CategoryPatch) -> StoreResult<Option<Category>>;
    async fn delete(&self, id: &str) -> StoreResult<bool>;
}

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn list_all(&self) -> StoreResult<Vec<Product>>;
    async fn get_by_id(&self, id: &str) -> StoreResult<Option<Product>>;
    async fn list_by_category(&self, category_id: &str) -> StoreResult<Vec<Product>>;
    async fn create(&self, data: NewProduct) -> StoreResult<Product>;
    async fn update(&self, id: &str, patch: ProductPatch) -> StoreResult<Option<Product>>;
    async fn delete(&self, id: &str) -> StoreResult<bool>;
}

/// Every catalog operation behind one object.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn get_all_products(&self) -> StoreResult<Vec<Product>>;
    async fn get_product_by_id(&self, id: &str) -> StoreResult<Option<Product>>;
    async fn get_products_by_category(&self, category_id: &str) -> StoreResult<Vec<Product>>;
    async fn create_product(&self, product: NewProduct) -> StoreResult<Product>;
    async fn update_product(&self, id: &str, patch: ProductPatch) -> StoreResult<Option<Product>>;
    async fn delete_product(&self, id: &str) -> StoreResult<bool>;

    async fn get_all_categories(&self) -> StoreResult<Vec<Category>>;
    async fn get_category_by_id(&self, id: &str) -> StoreResult<Option<Category>>;
    async fn create_category(&self, category: NewCategory) -> StoreResult<Category>;
    async fn update_category(
        &self,
        id: &str,
        patch: CategoryPatch,
    ) -> StoreResult<Option<Category>>;
    async fn delete_category(&self, id: &str) -> StoreResult<bool>;
}

pub struct StorageFacade<P, C> {
    products: P,
    categories: C,
}

pub type MongoStorage = StorageFacade<MongoRepository<Product>, MongoRepository<Category>>;
pub type MemoryStorage = StorageFacade<MemoryRepository<Product>, MemoryRepository<Category>>;

impl<P, C> StorageFacade<P, C>
where
    P: ProductRepository,
    C: CategoryRepository,
{
    pub fn new(products: P, categories: C) -> Self {
        Self {
            products,
            categories,
        }
    }

    pub fn products(&self) -> &P {
        &self.products
    }

    pub fn categories(&self) -> &C {
        &self.categories
    }
}

impl MongoStorage {
    /// Both repositories share `connection`; nothing is opened until the
    /// first operation.
    pub fn mongo(connection: Arc<ConnectionManager>) -> Self {
        Self::new(
            MongoRepository::new(Arc::clone(&connection)),
            MongoRepository::new(connection),
        )
    }
}

impl MemoryStorage {
    pub fn in_memory() -> Self {
        Self::new(MemoryRepository::new(), MemoryRepository::new())
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::in_memory()
    }
}

#[async_trait]
impl<P, C> Storage for StorageFacade<P, C>
where
    P: ProductRepository,
    C: CategoryRepository,
{
    async fn get_all_products(&self) -> StoreResult<Vec<Product>> {
        self.products.list_all().await
    }

    async fn get_product_by_id(&self, id: &str) -> StoreResult<Option<Product>> {
        self.products.get_by_id(id).await
    }

    async fn get_products_by_category(&self, category_id: &str) -> StoreResult<Vec<Product>> {
        self.products.list_by_category(category_id).await
    }

    async fn create_product(&self, product: NewProduct) -> StoreResult<Product> {
        self.products.create(product).await
    }

    async fn update_product(&self, id: &str, patch: ProductPatch) -> StoreResult<Option<Product>> {
        self.products.update(id, patch).await
    }

    async fn delete_product(&self, id: &str) -> StoreResult<bool> {
        self.products.delete(id).await
    }

    async fn get_all_categories(&self) -> StoreResult<Vec<Category>> {
        self.categories.list_all().await
    }

    async fn get_category_by_id(&self, id: &str) -> StoreResult<Option<Category>> {
        self.categories.get_by_id(id).await
    }

    async fn create_category(&self, category: NewCategory) -> StoreResult<Category> {
        self.categories.create(category).await
    }

    async fn update_category(
        &self,
        id: &str,
        patch: CategoryPatch,
    ) -> StoreResult<Option<Category>> {
        self.categories.update(id, patch).await
    }

    async fn delete_category(&self, id: &str) -> StoreResult<bool> {
        self.categories.delete(id).await
    }
}
