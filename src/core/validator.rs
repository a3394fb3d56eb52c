//! Header validation for imported worksheets.

use crate::error::{SyncError, SyncResult};
use crate::types::{ColumnMap, SheetRow, TranslationMode};

/// Check a sheet's header row against the active mode and map its language
/// columns.
///
/// Forced mode requires the literal `key` in column 0; source-keyed mode
/// requires the source language there. A violated header makes the whole
/// sheet uninterpretable, so this is a hard error rather than a skip.
/// Columns after the first map positionally to language codes; whatever
/// they contain is taken at face value.
pub fn validate_header(
    header: &SheetRow,
    mode: TranslationMode,
    source_language: &str,
    category: &str,
) -> SyncResult<ColumnMap> {
    let first = header.first().map(String::as_str);

    match mode {
        TranslationMode::Forced => {
            if first != Some("key") {
                return Err(SyncError::KeyColumnMissing(category.to_string()));
            }
        }
        TranslationMode::SourceKeyed => {
            if first != Some(source_language) {
                return Err(SyncError::SourceColumnMissing {
                    category: category.to_string(),
                    language: source_language.to_string(),
                });
            }
        }
    }

    Ok(header
        .iter()
        .enumerate()
        .skip(1)
        .map(|(index, language)| (index, language.clone()))
        .collect())
}
