use std::io;
use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure taxonomy of the flat-file data layer. `Read` and `Write` are
/// storage failures; the remaining variants are domain outcomes that the API
/// maps to 4xx responses.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read collection '{collection}': {source}")]
    Read {
        collection: &'static str,
        #[source]
        source: anyhow::Error,
    },
    #[error("failed to write collection '{collection}': {source}")]
    Write {
        collection: &'static str,
        #[source]
        source: anyhow::Error,
    },
    #[error("{kind} '{key}' not found")]
    NotFound { kind: &'static str, key: String },
    #[error("{kind} with this slug already exists")]
    DuplicateSlug { kind: &'static str, slug: String },
    #[error("{0}")]
    Validation(String),
}

impl StoreError {
    pub fn read(collection: &'static str, source: impl Into<anyhow::Error>) -> Self {
        StoreError::Read {
            collection,
            source: source.into(),
        }
    }

    pub fn write(collection: &'static str, source: impl Into<anyhow::Error>) -> Self {
        StoreError::Write {
            collection,
            source: source.into(),
        }
    }

    pub fn not_found(kind: &'static str, key: impl Into<String>) -> Self {
        StoreError::NotFound {
            kind,
            key: key.into(),
        }
    }

    pub fn duplicate_slug(kind: &'static str, slug: impl Into<String>) -> Self {
        StoreError::DuplicateSlug {
            kind,
            slug: slug.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        StoreError::Validation(message.into())
    }

    /// True when a read failed because the backing document does not exist
    /// yet. Only the orders collection is allowed to treat this as an empty
    /// collection; every other caller must propagate the error.
    pub fn is_missing_document(&self) -> bool {
        match self {
            StoreError::Read { source, .. } => source
                .downcast_ref::<io::Error>()
                .map(|e| e.kind() == io::ErrorKind::NotFound)
                .unwrap_or(false),
            _ => false,
        }
    }
}
