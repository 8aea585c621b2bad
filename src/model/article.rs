use crate::model::{CatalogRecord, Id};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::default_timestamp;
use super::product::truncate_chars;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cover {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternative_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub document_id: Id,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cover: Option<Cover>,
    /// Author and category are opaque embedded objects kept as written.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<serde_json::Value>,
    #[serde(default = "default_timestamp")]
    pub published_at: DateTime<Utc>,
    #[serde(default = "default_timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "default_timestamp")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewArticle {
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cover: Option<Cover>,
    #[serde(default)]
    pub author: Option<serde_json::Value>,
    #[serde(default)]
    pub category: Option<serde_json::Value>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

impl Article {
    pub fn from_new(new: NewArticle, document_id: Id, slug: String, now: DateTime<Utc>) -> Self {
        let content = new.content.unwrap_or_default();
        // A missing description falls back to the first 200 characters of the
        // body content.
        let description = new
            .description
            .unwrap_or_else(|| truncate_chars(&content, 200));
        Self {
            document_id,
            title: new.title,
            slug,
            content,
            description,
            cover: new.cover,
            author: new.author,
            category: new.category,
            published_at: new.published_at.unwrap_or(now),
            created_at: now,
            updated_at: now,
        }
    }
}

impl CatalogRecord for Article {
    const COLLECTION: &'static str = "articles";
    const ID_PREFIX: &'static str = "art";
    const KIND: &'static str = "article";

    fn document_id(&self) -> &str {
        &self.document_id
    }

    fn slug(&self) -> &str {
        &self.slug
    }
}
