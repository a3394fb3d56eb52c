use indexmap::IndexMap;

//==============================================================================
// Catalog data model
//==============================================================================

/// One persisted catalog: message key → translated string for a single
/// (category, language) pair. Insertion order is meaningful: it is the row
/// order on export and the file order on write.
pub type CatalogRecord = IndexMap<String, String>;

/// One row of a worksheet. Row 0 of a sheet is the header.
pub type SheetRow = Vec<String>;

/// Positional language columns of a validated sheet: column index → language
/// code, for every column after the row-identity column.
pub type ColumnMap = Vec<(usize, String)>;

/// Column layout mode for a category's worksheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslationMode {
    /// The source-language text doubles as the row key; the source language
    /// occupies column 0 and gets no translation column of its own.
    SourceKeyed,
    /// Forced translation: column 0 is an opaque `key` column and every
    /// language, the source language included, gets a translation column.
    Forced,
}

impl TranslationMode {
    pub fn from_forced(forced: bool) -> Self {
        if forced {
            TranslationMode::Forced
        } else {
            TranslationMode::SourceKeyed
        }
    }

    pub fn is_forced(&self) -> bool {
        matches!(self, TranslationMode::Forced)
    }
}

/// The pivot unit: all per-language catalogs of one category, languages in
/// discovery order. Built fresh for each export and consumed once.
#[derive(Debug, Clone)]
pub struct CategoryMatrix {
    pub category: String,
    pub languages: IndexMap<String, CatalogRecord>,
}

impl CategoryMatrix {
    pub fn new(category: String) -> Self {
        Self {
            category,
            languages: IndexMap::new(),
        }
    }

    pub fn add_language(&mut self, language: String, record: CatalogRecord) {
        self.languages.insert(language, record);
    }

    /// The record whose keys drive row enumeration, if present.
    pub fn source_record(&self, source_language: &str) -> Option<&CatalogRecord> {
        self.languages.get(source_language)
    }
}

/// A named worksheet as plain rows, decoupled from any workbook library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetData {
    pub title: String,
    pub rows: Vec<SheetRow>,
}

impl SheetData {
    pub fn new(title: String, rows: Vec<SheetRow>) -> Self {
        Self { title, rows }
    }

    pub fn header(&self) -> Option<&SheetRow> {
        self.rows.first()
    }

    pub fn data_rows(&self) -> &[SheetRow] {
        if self.rows.is_empty() {
            &[]
        } else {
            &self.rows[1..]
        }
    }
}
