use crate::model::{CatalogRecord, Id};
use chrono::Utc;
use uuid::Uuid;

/// Next identifier for a catalog collection: strip the collection's fixed
/// prefix from every existing id, take the numeric maximum and add one.
/// Unparseable ids count as 0; an empty collection yields `<prefix>1`.
///
/// Two concurrent creates computing the same maximum would collide; the
/// store's per-collection cycle lock is what keeps creates sequential.
pub fn next_document_id<E: CatalogRecord>(records: &[E]) -> Id {
    let max = records
        .iter()
        .map(|r| numeric_part(r.document_id(), E::ID_PREFIX))
        .max()
        .unwrap_or(0);
    format!("{}{}", E::ID_PREFIX, max + 1)
}

fn numeric_part(id: &str, prefix: &str) -> u64 {
    id.strip_prefix(prefix)
        .unwrap_or(id)
        .parse::<u64>()
        .unwrap_or(0)
}

/// Order identifiers use a distinct format: `ORD-<unix millis>-<random 0..999>`.
pub fn generate_order_id() -> String {
    let millis = Utc::now().timestamp_millis();
    let random = Uuid::new_v4().as_u128() % 1000;
    format!("ORD-{millis}-{random}")
}
