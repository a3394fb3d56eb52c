//! Merge policy for imported translations against catalogs on disk.

use crate::types::CatalogRecord;

/// Overlay incoming translations onto an existing record.
///
/// Incoming values win on key collision; keys present only in the existing
/// record are retained. With `sort` the result iterates in ascending key
/// order, otherwise in existing order followed by newly introduced keys in
/// encounter order.
pub fn merge(
    existing: Option<&CatalogRecord>,
    incoming: &CatalogRecord,
    sort: bool,
) -> CatalogRecord {
    let mut merged = existing.cloned().unwrap_or_default();

    for (key, value) in incoming {
        merged.insert(key.clone(), value.clone());
    }

    if sort {
        merged.sort_keys();
    }

    merged
}
