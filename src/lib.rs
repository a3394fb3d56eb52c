//! Langsheet - translation catalog / Excel workbook synchronization
//!
//! This library pivots per-category, per-language translation catalogs
//! (key → localized string mappings) into one worksheet per category for
//! human editing, and merges edited workbooks back into the catalogs on
//! disk.
//!
//! # Features
//!
//! - One worksheet per category, languages as columns
//! - Source-keyed or forced-translation column layouts per category
//! - Non-destructive merge against existing catalogs on import
//! - Optional alphabetical key ordering
//! - Leading comment blocks of catalog files survive rewrites
//!
//! # Example
//!
//! ```no_run
//! use langsheet::catalog::FsCatalogStore;
//! use langsheet::config::SyncConfig;
//! use langsheet::core::{build_sheets, collect_matrices};
//! use langsheet::excel::WorkbookExporter;
//! use std::path::Path;
//!
//! let store = FsCatalogStore::new("messages");
//! let config = SyncConfig::default();
//!
//! let matrices = collect_matrices(&store)?;
//! let sheets = build_sheets(&matrices, &config);
//! WorkbookExporter::new(sheets).export(Path::new("translations.xlsx"))?;
//! # Ok::<(), langsheet::error::SyncError>(())
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod excel;
pub mod types;

// Re-export commonly used types
pub use config::SyncConfig;
pub use error::{SyncError, SyncResult};
pub use types::{CatalogRecord, CategoryMatrix, ColumnMap, SheetData, SheetRow, TranslationMode};
