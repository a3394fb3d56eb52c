//! Excel workbook adapters.
//!
//! The engine works on [`crate::types::SheetData`] only; these adapters are
//! the single place that knows about the .xlsx binary format:
//! - Export: sheets → workbook via `rust_xlsxwriter`
//! - Import: workbook → sheets via `calamine`

mod exporter;
mod importer;

pub use exporter::WorkbookExporter;
pub use importer::WorkbookImporter;
