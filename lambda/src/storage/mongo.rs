//! MongoDB-backed repositories.

use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::Collection;
use mongodb::bson::{Document, doc, to_document};
use mongodb::options::ReturnDocument;
use tracing::debug;

use super::connection::ConnectionManager;
use super::entity::Entity;
use super::{CategoryRepository, ProductRepository};
use crate::core::models::{Category, CategoryPatch, NewCategory, NewProduct, Product, ProductPatch};
use crate::errors::StoreResult;

/// Repository over the collection for `E`. Every call goes through
/// `ConnectionManager::ensure_connected` first.
pub struct MongoRepository<E> {
    connection: Arc<ConnectionManager>,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> MongoRepository<E> {
    pub fn new(connection: Arc<ConnectionManager>) -> Self {
        Self {
            connection,
            _entity: PhantomData,
        }
    }

    async fn collection(&self) -> StoreResult<Collection<E>> {
        let database = self.connection.ensure_connected().await?;
        Ok(database.collection::<E>(E::COLLECTION))
    }

    async fn find_many(&self, filter: Document) -> StoreResult<Vec<E>> {
        let cursor = self.collection().await?.find(filter).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<E>> {
        Ok(self.collection().await?.find_one(doc! { "id": id }).await?)
    }

    async fn insert(&self, new: E::New) -> StoreResult<E> {
        let mut entity = E::from_new(new)?;
        let result = self.collection().await?.insert_one(&entity).await?;
        if let Some(storage_id) = result.inserted_id.as_object_id() {
            entity.set_storage_id(storage_id);
        }
        debug!(collection = E::COLLECTION, id = entity.id(), "Inserted document");
        Ok(entity)
    }

    async fn merge(&self, id: &str, patch: &E::Patch) -> StoreResult<Option<E>> {
        E::validate_patch(patch)?;
        if E::patch_is_empty(patch) {
            return self.find_by_id(id).await;
        }

        let set = to_document(patch)?;
        let updated = self
            .collection()
            .await?
            .find_one_and_update(doc! { "id": id }, doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await?;
        debug!(collection = E::COLLECTION, id, found = updated.is_some(), "Merged update");
        Ok(updated)
    }

    async fn remove(&self, id: &str) -> StoreResult<bool> {
        let result = self
            .collection()
            .await?
            .delete_one(doc! { "id": id })
            .await?;
        debug!(collection = E::COLLECTION, id, deleted = result.deleted_count, "Deleted document");
        Ok(result.deleted_count > 0)
    }
}

#[async_trait]
impl CategoryRepository for MongoRepository<Category> {
    async fn list_all(&self) -> StoreResult<Vec<Category>> {
        self.find_many(doc! {}).await
    }

    async fn get_by_id(&self, id: &str) -> StoreResult<Option<Category>> {
        self.find_by_id(id).await
    }

    async fn create(&self, data: NewCategory) -> StoreResult<Category> {
        self.insert(data).await
    }

    async fn update(&self, id: &str, patch: CategoryPatch) -> StoreResult<Option<Category>> {
        self.merge(id, &patch).await
    }

    async fn delete(&self, id: &str) -> StoreResult<bool> {
        self.remove(id).await
    }
}

#[async_trait]
impl ProductRepository for MongoRepository<Product> {
    async fn list_all(&self) -> StoreResult<Vec<Product>> {
        self.find_many(doc! {}).await
    }

    async fn get_by_id(&self, id: &str) -> StoreResult<Option<Product>> {
        self.find_by_id(id).await
    }

    async fn list_by_category(&self, category_id: &str) -> StoreResult<Vec<Product>> {
        self.find_many(doc! { "categoryId": category_id }).await
    }

    async fn create(&self, data: NewProduct) -> StoreResult<Product> {
        self.insert(data).await
    }

    async fn update(&self, id: &str, patch: ProductPatch) -> StoreResult<Option<Product>> {
        self.merge(id, &patch).await
    }

    async fn delete(&self, id: &str) -> StoreResult<bool> {
        self.remove(id).await
    }
}
