//! Per-category orchestration of the export and import pipelines.
//!
//! Categories are processed to completion one at a time; there is no shared
//! state across them, so a caller can checkpoint between categories.

use crate::catalog::CatalogStore;
use crate::config::SyncConfig;
use crate::core::merge::merge;
use crate::core::pivoter::{from_sheet, to_sheet};
use crate::core::validator::validate_header;
use crate::error::{SyncError, SyncResult};
use crate::types::{CategoryMatrix, SheetData, SheetRow};
use indexmap::IndexMap;

/// Counters reported back to the CLI after an import.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    /// Worksheets processed.
    pub sheets: usize,
    /// (category, language) catalogs written.
    pub records: usize,
}

/// Group the store's listing into one matrix per category.
///
/// Categories keep first-appearance order, languages keep discovery order,
/// and every record is a full copy detached from the store.
pub fn collect_matrices(store: &impl CatalogStore) -> SyncResult<Vec<CategoryMatrix>> {
    let mut matrices: IndexMap<String, CategoryMatrix> = IndexMap::new();

    for (category, language) in store.list()? {
        let record = store.read(&category, &language)?.unwrap_or_default();
        matrices
            .entry(category.clone())
            .or_insert_with(|| CategoryMatrix::new(category))
            .add_language(language, record);
    }

    Ok(matrices.into_values().collect())
}

/// Pivot every matrix into a worksheet, one sheet per category, in category
/// discovery order.
pub fn build_sheets(matrices: &[CategoryMatrix], config: &SyncConfig) -> Vec<SheetData> {
    matrices
        .iter()
        .map(|matrix| {
            let mode = config.mode_for(&matrix.category);
            SheetData::new(
                matrix.category.clone(),
                to_sheet(matrix, mode, &config.source_language),
            )
        })
        .collect()
}

/// Validate, pivot, merge, and persist every sheet of a workbook.
///
/// A schema violation aborts the whole run: a sheet whose header does not
/// match the active mode cannot be safely interpreted. A failed write
/// surfaces as [`SyncError::Persist`] naming the (category, language) pair;
/// catalogs already written stay written.
pub fn apply_sheets(
    store: &mut impl CatalogStore,
    sheets: &[SheetData],
    config: &SyncConfig,
    sort: bool,
) -> SyncResult<ImportSummary> {
    let mut summary = ImportSummary::default();
    let empty_header = SheetRow::new();

    for sheet in sheets {
        let category = &sheet.title;
        let mode = config.mode_for(category);

        let header = sheet.header().unwrap_or(&empty_header);
        let columns = validate_header(header, mode, &config.source_language, category)?;

        let catalogs = from_sheet(sheet.data_rows(), &columns, mode, &config.source_language);

        for (language, incoming) in &catalogs {
            let existing = store.read(category, language)?;
            let merged = merge(existing.as_ref(), incoming, sort);

            store
                .write(category, language, &merged)
                .map_err(|err| SyncError::Persist {
                    category: category.clone(),
                    language: language.clone(),
                    reason: err.to_string(),
                })?;

            summary.records += 1;
        }

        summary.sheets += 1;
    }

    Ok(summary)
}
