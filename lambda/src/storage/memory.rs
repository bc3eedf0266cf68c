//! Process-local repositories with the same observable behavior as the
//! MongoDB ones: insertion order, unique `id`, merge-on-update.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use super::entity::Entity;
use super::{CategoryRepository, ProductRepository};
use crate::core::models::{Category, CategoryPatch, NewCategory, NewProduct, Product, ProductPatch};
use crate::errors::{StoreError, StoreResult};

pub struct MemoryRepository<E> {
    rows: RwLock<Vec<E>>,
}

impl<E: Entity> MemoryRepository<E> {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
        }
    }

    async fn filter_by<F>(&self, keep: F) -> Vec<E>
    where
        F: Fn(&E) -> bool + Send,
    {
        self.rows
            .read()
            .await
            .iter()
            .filter(|row| keep(*row))
            .cloned()
            .collect()
    }

    async fn find_by_id(&self, id: &str) -> Option<E> {
        self.rows.read().await.iter().find(|row| row.id() == id).cloned()
    }

    async fn insert(&self, new: E::New) -> StoreResult<E> {
        let mut entity = E::from_new(new)?;
        let mut rows = self.rows.write().await;
        if rows.iter().any(|row| row.id() == entity.id()) {
            return Err(StoreError::Storage(format!(
                "duplicate key in {}: id {:?}",
                E::COLLECTION,
                entity.id()
            )));
        }
        entity.set_storage_id(ObjectId::new());
        rows.push(entity.clone());
        Ok(entity)
    }

    async fn merge(&self, id: &str, patch: &E::Patch) -> StoreResult<Option<E>> {
        E::validate_patch(patch)?;
        let mut rows = self.rows.write().await;
        Ok(rows.iter_mut().find(|row| row.id() == id).map(|row| {
            row.apply_patch(patch);
            row.clone()
        }))
    }

    async fn remove(&self, id: &str) -> bool {
        let mut rows = self.rows.write().await;
        match rows.iter().position(|row| row.id() == id) {
            Some(index) => {
                rows.remove(index);
                true
            }
            None => false,
        }
    }
}

impl<E: Entity> Default for MemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CategoryRepository for MemoryRepository<Category> {
    async fn list_all(&self) -> StoreResult<Vec<Category>> {
        Ok(self.filter_by(|_| true).await)
    }

    async fn get_by_id(&self, id: &str) -> StoreResult<Option<Category>> {
        Ok(self.find_by_id(id).await)
    }

    async fn create(&self, data: NewCategory) -> StoreResult<Category> {
        self.insert(data).await
    }

    async fn update(&self, id: &str, patch: CategoryPatch) -> StoreResult<Option<Category>> {
        self.merge(id, &patch).await
    }

    async fn delete(&self, id: &str) -> StoreResult<bool> {
        Ok(self.remove(id).await)
    }
}

#[async_trait]
impl ProductRepository for MemoryRepository<Product> {
    async fn list_all(&self) -> StoreResult<Vec<Product>> {
        Ok(self.filter_by(|_| true).await)
    }

    async fn get_by_id(&self, id: &str) -> StoreResult<Option<Product>> {
        Ok(self.find_by_id(id).await)
    }

    async fn list_by_category(&self, category_id: &str) -> StoreResult<Vec<Product>> {
        Ok(self
            .filter_by(|product| product.category_id == category_id)
            .await)
    }

    async fn create(&self, data: NewProduct) -> StoreResult<Product> {
        self.insert(data).await
    }

    async fn update(&self, id: &str, patch: ProductPatch) -> StoreResult<Option<Product>> {
        self.merge(id, &patch).await
    }

    async fn delete(&self, id: &str) -> StoreResult<bool> {
        Ok(self.remove(id).await)
    }
}
