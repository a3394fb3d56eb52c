//! Workbook writer: ordered sheets → one .xlsx artifact.

use crate::error::{SyncError, SyncResult};
use crate::types::SheetData;
use rust_xlsxwriter::{Format, ProtectionOptions, Workbook};
use std::path::Path;

/// Writes the pivoted sheets with the presentation translators expect:
/// bold header, frozen pane below and right of the header cell, autosized
/// columns, and unlocked-by-default cells under sheet protection so the
/// grid itself stays intact while every translation stays editable.
pub struct WorkbookExporter {
    sheets: Vec<SheetData>,
}

impl WorkbookExporter {
    pub fn new(sheets: Vec<SheetData>) -> Self {
        Self { sheets }
    }

    /// Write all sheets, in order, to a single .xlsx file.
    pub fn export(&self, output_path: &Path) -> SyncResult<()> {
        let mut workbook = Workbook::new();

        let header_format = Format::new().set_bold().set_unlocked();
        let cell_format = Format::new().set_unlocked();

        for sheet in &self.sheets {
            let worksheet = workbook.add_worksheet();
            worksheet
                .set_name(&sheet.title)
                .map_err(|e| SyncError::Workbook(format!("Failed to set worksheet name: {e}")))?;

            // Column formatting stays allowed so translators can widen
            // columns under protection.
            worksheet.protect_with_options(&ProtectionOptions {
                format_columns: true,
                ..ProtectionOptions::default()
            });

            for (row_idx, row) in sheet.rows.iter().enumerate() {
                let format = if row_idx == 0 {
                    &header_format
                } else {
                    &cell_format
                };

                for (col_idx, cell) in row.iter().enumerate() {
                    worksheet
                        .write_string_with_format(row_idx as u32, col_idx as u16, cell, format)
                        .map_err(|e| {
                            SyncError::Workbook(format!("Failed to write cell: {e}"))
                        })?;
                }
            }

            worksheet
                .set_freeze_panes(1, 1)
                .map_err(|e| SyncError::Workbook(format!("Failed to freeze header: {e}")))?;

            worksheet.autofit();
        }

        workbook
            .save(output_path)
            .map_err(|e| SyncError::Workbook(format!("Failed to save Excel file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sheet(title: &str, rows: &[&[&str]]) -> SheetData {
        SheetData::new(
            title.to_string(),
            rows.iter()
                .map(|row| row.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn test_export_empty_workbook() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.xlsx");

        let exporter = WorkbookExporter::new(vec![]);
        assert!(exporter.export(&path).is_ok());
        assert!(path.exists());
    }

    #[test]
    fn test_export_single_sheet() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.xlsx");

        let exporter = WorkbookExporter::new(vec![sheet(
            "app",
            &[&["en-US", "de"], &["Language", "Sprache"]],
        )]);

        assert!(exporter.export(&path).is_ok());
        let metadata = std::fs::metadata(&path).unwrap();
        assert!(metadata.len() > 0);
    }

    #[test]
    fn test_export_header_only_sheet() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("header_only.xlsx");

        let exporter = WorkbookExporter::new(vec![sheet("app", &[&["en-US", "de"]])]);
        assert!(exporter.export(&path).is_ok());
    }

    #[test]
    fn test_export_multiple_sheets() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("multi.xlsx");

        let exporter = WorkbookExporter::new(vec![
            sheet("app", &[&["en-US", "de"], &["Language", "Sprache"]]),
            sheet("widget", &[&["en-US", "de"], &["Close", "Schließen"]]),
        ]);

        assert!(exporter.export(&path).is_ok());
    }

    #[test]
    fn test_export_to_nonexistent_directory_fails() {
        let exporter = WorkbookExporter::new(vec![]);
        let result = exporter.export(Path::new("/nonexistent/dir/output.xlsx"));
        assert!(result.is_err());
    }

    #[test]
    fn test_export_invalid_sheet_name_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.xlsx");

        // Worksheet names may not contain "/".
        let exporter = WorkbookExporter::new(vec![sheet("bad/name", &[&["en-US"]])]);
        let result = exporter.export(&path);
        assert!(matches!(result, Err(SyncError::Workbook(_))));
    }
}
