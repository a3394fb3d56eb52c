//! Workbook reader: .xlsx file → ordered sheets of string cells.

use crate::error::{SyncError, SyncResult};
use crate::types::{SheetData, SheetRow};
use calamine::{open_workbook, Data, Reader, Xlsx};
use std::path::{Path, PathBuf};

/// Reads a workbook data-only: sheet titles and cell values, no formulas,
/// no styling. Sheets come back in file order.
pub struct WorkbookImporter {
    path: PathBuf,
}

impl WorkbookImporter {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn import(&self) -> SyncResult<Vec<SheetData>> {
        let mut workbook: Xlsx<_> = open_workbook(&self.path)
            .map_err(|e| SyncError::Workbook(format!("Failed to open workbook: {e}")))?;

        let sheet_names = workbook.sheet_names().to_vec();
        let mut sheets = Vec::with_capacity(sheet_names.len());

        for name in sheet_names {
            let range = workbook.worksheet_range(&name).map_err(|e| {
                SyncError::Workbook(format!("Failed to read worksheet \"{name}\": {e}"))
            })?;

            let rows: Vec<SheetRow> = range
                .rows()
                .map(|row| row.iter().map(cell_to_string).collect())
                .collect();

            sheets.push(SheetData::new(name, rows));
        }

        Ok(sheets)
    }
}

/// Every cell degrades to a string; empty and error cells become `""`.
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        Data::Float(f) if f.fract() == 0.0 => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::DateTime(dt) => dt.as_f64().to_string(),
        Data::Empty | Data::Error(_) => String::new(),
    }
}
