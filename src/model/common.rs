use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub type Id = String;

/// Shared behavior of the four catalog collections (products, categories,
/// brands, articles). Orders live outside this trait: they carry a generated
/// `ORD-` identifier and no slug.
pub trait CatalogRecord: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Collection key, also the top-level array key inside the JSON document.
    const COLLECTION: &'static str;
    /// Fixed identifier prefix ("" for bare integer ids).
    const ID_PREFIX: &'static str;
    /// Singular noun used in error messages ("product", "article", ...).
    const KIND: &'static str;

    fn document_id(&self) -> &str;
    fn slug(&self) -> &str;
}

/// Default timestamp for records written before timestamps were recorded.
pub fn default_timestamp() -> DateTime<Utc> {
    DateTime::from_timestamp(0, 0).unwrap_or_else(Utc::now)
}
