use crate::model::CatalogRecord;
use crate::store::{StoreError, StoreResult};
use chrono::{DateTime, Utc};
use serde_json::Value;

/// Linear scan accepting either identifier: the internal document id or the
/// human-friendly slug.
pub fn find_record<'a, E: CatalogRecord>(records: &'a [E], key: &str) -> Option<&'a E> {
    records
        .iter()
        .find(|r| r.document_id() == key || r.slug() == key)
}

pub fn position_of<E: CatalogRecord>(records: &[E], key: &str) -> Option<usize> {
    records
        .iter()
        .position(|r| r.document_id() == key || r.slug() == key)
}

/// Shallow merge of a partial JSON payload onto an existing record, the same
/// way the original spreads `{...existing, ...body}`. The document id always
/// survives, even when the payload tries to overwrite it, and `updatedAt` is
/// refreshed (collections without that field drop it on deserialization).
pub fn merge_patch<E: CatalogRecord>(
    existing: &E,
    patch: &Value,
    now: DateTime<Utc>,
) -> StoreResult<E> {
    let mut base = serde_json::to_value(existing)
        .map_err(|e| StoreError::validation(format!("record not serializable: {e}")))?;
    let base_map = base
        .as_object_mut()
        .ok_or_else(|| StoreError::validation("record is not a JSON object"))?;

    match patch {
        Value::Object(fields) => {
            for (key, value) in fields {
                base_map.insert(key.clone(), value.clone());
            }
        }
        Value::Null => {}
        _ => return Err(StoreError::validation("update payload must be a JSON object")),
    }

    base_map.insert(
        "documentId".to_string(),
        Value::String(existing.document_id().to_string()),
    );
    base_map.insert(
        "updatedAt".to_string(),
        serde_json::to_value(now)
            .map_err(|e| StoreError::validation(format!("timestamp not serializable: {e}")))?,
    );

    serde_json::from_value(base)
        .map_err(|e| StoreError::validation(format!("invalid update payload: {e}")))
}
