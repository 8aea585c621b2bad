use crate::model::{Brand, CatalogRecord, Category, Id};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::default_timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    Active,
    Inactive,
}

impl Default for ProductStatus {
    fn default() -> Self {
        ProductStatus::Active
    }
}

/// A catalog product. The `category` and `brand` fields are snapshots taken
/// at write time, not live references: editing a category afterwards does not
/// change products that already embed it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub document_id: Id,
    pub name: String,
    pub slug: String,
    /// Price in the smallest currency unit.
    #[serde(default)]
    pub price: i64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub status: ProductStatus,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub brand: Option<Brand>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default = "default_timestamp")]
    pub published_at: DateTime<Utc>,
    #[serde(default = "default_timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "default_timestamp")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub price: Option<i64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub status: Option<ProductStatus>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub brand: Option<Brand>,
    #[serde(default)]
    pub images: Option<Vec<String>>,
}

impl Product {
    pub fn from_new(new: NewProduct, document_id: Id, slug: String, now: DateTime<Utc>) -> Self {
        let description = new.description.unwrap_or_default();
        // A missing short description falls back to the first 100 characters
        // of the long one.
        let short_description = new
            .short_description
            .unwrap_or_else(|| truncate_chars(&description, 100));
        Self {
            document_id,
            name: new.name,
            slug,
            price: new.price.unwrap_or(0),
            description,
            short_description,
            content: new.content.unwrap_or_default(),
            status: new.status.unwrap_or_default(),
            category: new.category,
            brand: new.brand,
            images: new.images.unwrap_or_default(),
            published_at: now,
            created_at: now,
            updated_at: now,
        }
    }
}

impl CatalogRecord for Product {
    const COLLECTION: &'static str = "products";
    const ID_PREFIX: &'static str = "";
    const KIND: &'static str = "product";

    fn document_id(&self) -> &str {
        &self.document_id
    }

    fn slug(&self) -> &str {
        &self.slug
    }
}

/// Truncates on a character boundary, never mid-codepoint.
pub(crate) fn truncate_chars(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}
