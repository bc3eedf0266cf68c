//! Maps catalog types onto stored collections.
//!
//! Both backends are generic over `Entity`, so the per-kind differences
//! (collection name, insert/patch payloads) live here and nowhere else.

use mongodb::bson::oid::ObjectId;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::core::models::{Category, CategoryPatch, NewCategory, NewProduct, Product, ProductPatch};
use crate::errors::StoreResult;

pub trait Entity:
    Serialize + DeserializeOwned + Clone + Send + Sync + Unpin + 'static
{
    type New: Send + 'static;
    type Patch: Serialize + Send + Sync + 'static;

    const COLLECTION: &'static str;

    /// Validates an insert payload and turns it into an unsaved entity.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Validation` if the payload is rejected.
    fn from_new(new: Self::New) -> StoreResult<Self>;

    /// # Errors
    ///
    /// Returns `StoreError::Validation` if a present field is rejected.
    fn validate_patch(patch: &Self::Patch) -> StoreResult<()>;
    fn patch_is_empty(patch: &Self::Patch) -> bool;
    fn apply_patch(&mut self, patch: &Self::Patch);

    fn id(&self) -> &str;
    fn set_storage_id(&mut self, storage_id: ObjectId);
}

impl Entity for Category {
    type New = NewCategory;
    type Patch = CategoryPatch;

    const COLLECTION: &'static str = "categories";

    fn from_new(new: NewCategory) -> StoreResult<Self> {
        new.validate()?;
        Ok(new.into())
    }

    fn validate_patch(patch: &CategoryPatch) -> StoreResult<()> {
        patch.validate()
    }

    fn patch_is_empty(patch: &CategoryPatch) -> bool {
        patch.is_empty()
    }

    fn apply_patch(&mut self, patch: &CategoryPatch) {
        patch.apply(self);
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn set_storage_id(&mut self, storage_id: ObjectId) {
        self.storage_id = Some(storage_id);
    }
}

impl Entity for Product {
    type New = NewProduct;
    type Patch = ProductPatch;

    const COLLECTION: &'static str = "products";

    fn from_new(new: NewProduct) -> StoreResult<Self> {
        new.validate()?;
        Ok(new.into())
    }

    fn validate_patch(patch: &ProductPatch) -> StoreResult<()> {
        patch.validate()
    }

    fn patch_is_empty(patch: &ProductPatch) -> bool {
        patch.is_empty()
    }

    fn apply_patch(&mut self, patch: &ProductPatch) {
        patch.apply(self);
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn set_storage_id(&mut self, storage_id: ObjectId) {
        self.storage_id = Some(storage_id);
    }
}
