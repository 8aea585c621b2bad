use crate::model::{CatalogRecord, Id};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::default_timestamp;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub document_id: Id,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "default_timestamp")]
    pub published_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Category {
    pub fn from_new(new: NewCategory, document_id: Id, slug: String, now: DateTime<Utc>) -> Self {
        Self {
            document_id,
            name: new.name,
            slug,
            description: new.description.unwrap_or_default(),
            created_at: now,
            published_at: now,
        }
    }
}

impl CatalogRecord for Category {
    const COLLECTION: &'static str = "categories";
    const ID_PREFIX: &'static str = "cat";
    const KIND: &'static str = "category";

    fn document_id(&self) -> &str {
        &self.document_id
    }

    fn slug(&self) -> &str {
        &self.slug
    }
}
