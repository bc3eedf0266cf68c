use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::errors::{StoreError, StoreResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Store-assigned surrogate key, absent until the record is inserted.
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub storage_id: Option<ObjectId>,
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub storage_id: Option<ObjectId>,
    pub id: String,
    /// Refers to `Category::id`. Not checked against the categories collection.
    pub category_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl NewCategory {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            image: None,
        }
    }

    /// # Errors
    ///
    /// Returns `StoreError::Validation` if `id` or `name` is blank.
    pub fn validate(&self) -> StoreResult<()> {
        require_text("id", &self.id)?;
        require_text("name", &self.name)
    }
}

impl From<NewCategory> for Category {
    fn from(new: NewCategory) -> Self {
        Self {
            storage_id: None,
            id: new.id,
            name: new.name,
            description: new.description,
            image: new.image,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub id: String,
    pub category_id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub featured: bool,
}

impl NewProduct {
    pub fn new(
        id: impl Into<String>,
        category_id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            category_id: category_id.into(),
            name: name.into(),
            description: None,
            price,
            images: Vec::new(),
            featured: false,
        }
    }

    /// # Errors
    ///
    /// Returns `StoreError::Validation` on a blank `id`, `categoryId` or `name`,
    /// or a negative or non-finite `price`.
    pub fn validate(&self) -> StoreResult<()> {
        require_text("id", &self.id)?;
        require_text("categoryId", &self.category_id)?;
        require_text("name", &self.name)?;
        require_price(self.price)
    }
}

impl From<NewProduct> for Product {
    fn from(new: NewProduct) -> Self {
        Self {
            storage_id: None,
            id: new.id,
            category_id: new.category_id,
            name: new.name,
            description: new.description,
            price: new.price,
            images: new.images,
            featured: new.featured,
        }
    }
}

/// Partial update for a category. `None` leaves the stored field untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl CategoryPatch {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.image.is_none()
    }

    /// # Errors
    ///
    /// Returns `StoreError::Validation` if a present `name` is blank.
    pub fn validate(&self) -> StoreResult<()> {
        if let Some(name) = &self.name {
            require_text("name", name)?;
        }
        Ok(())
    }

    pub fn apply(&self, category: &mut Category) {
        if let Some(name) = &self.name {
            category.name.clone_from(name);
        }
        if let Some(description) = &self.description {
            category.description.clone_from(description);
        }
        if let Some(image) = &self.image {
            category.image = Some(image.clone());
        }
    }
}

/// Partial update for a product. `None` leaves the stored field untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
}

impl ProductPatch {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.category_id.is_none()
            && self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.images.is_none()
            && self.featured.is_none()
    }

    /// # Errors
    ///
    /// Returns `StoreError::Validation` if a present field breaks the same
    /// rules `NewProduct::validate` enforces.
    pub fn validate(&self) -> StoreResult<()> {
        if let Some(category_id) = &self.category_id {
            require_text("categoryId", category_id)?;
        }
        if let Some(name) = &self.name {
            require_text("name", name)?;
        }
        if let Some(price) = self.price {
            require_price(price)?;
        }
        Ok(())
    }

    pub fn apply(&self, product: &mut Product) {
        if let Some(category_id) = &self.category_id {
            product.category_id.clone_from(category_id);
        }
        if let Some(name) = &self.name {
            product.name.clone_from(name);
        }
        if let Some(description) = &self.description {
            product.description = Some(description.clone());
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(images) = &self.images {
            product.images.clone_from(images);
        }
        if let Some(featured) = self.featured {
            product.featured = featured;
        }
    }
}

fn require_text(field: &str, value: &str) -> StoreResult<()> {
    if value.trim().is_empty() {
        return Err(StoreError::Validation(format!("{field} must not be blank")));
    }
    Ok(())
}

fn require_price(price: f64) -> StoreResult<()> {
    if !price.is_finite() || price < 0.0 {
        return Err(StoreError::Validation(format!(
            "price must be a non-negative number, got {price}"
        )));
    }
    Ok(())
}
