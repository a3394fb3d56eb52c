//! Pivot between the per-language mapping shape and the tabular sheet shape.
//!
//! Export: `{language → {key → value}}` becomes one header row plus one data
//! row per source-language key. Import: data rows become per-language partial
//! records, ready for merging.

use crate::types::{CatalogRecord, CategoryMatrix, ColumnMap, SheetRow, TranslationMode};
use indexmap::IndexMap;

/// Pivot a category matrix into sheet rows (header first).
///
/// In forced mode the header is `["key", lang1, lang2, ...]` in discovery
/// order. In source-keyed mode it is the de-duplicated union of the source
/// language and the matrix languages, source language first; the source text
/// doubles as the row key and gets no column of its own.
///
/// The source-language record defines the canonical key set: keys present
/// only in other languages never produce rows. Missing translations become
/// empty cells, never errors.
pub fn to_sheet(
    matrix: &CategoryMatrix,
    mode: TranslationMode,
    source_language: &str,
) -> Vec<SheetRow> {
    let mut rows = vec![header_row(matrix, mode, source_language)];

    let Some(source_record) = matrix.source_record(source_language) else {
        // No source-language catalog: nothing defines the key set.
        return rows;
    };

    for key in source_record.keys() {
        let mut row: SheetRow = vec![key.clone()];

        for (language, record) in &matrix.languages {
            if language != source_language || mode.is_forced() {
                row.push(record.get(key).cloned().unwrap_or_default());
            }
        }

        rows.push(row);
    }

    rows
}

fn header_row(matrix: &CategoryMatrix, mode: TranslationMode, source_language: &str) -> SheetRow {
    let mut header: SheetRow = Vec::with_capacity(matrix.languages.len() + 1);

    if mode.is_forced() {
        header.push("key".to_string());
        header.extend(matrix.languages.keys().cloned());
    } else {
        // De-duplicated union with the source language forced into column 0.
        header.push(source_language.to_string());
        for language in matrix.languages.keys() {
            if !header.contains(language) {
                header.push(language.clone());
            }
        }
    }

    header
}

/// Pivot validated sheet rows back into per-language partial records.
///
/// Column 0 is the row key. In source-keyed mode an empty source-language
/// entry is synthesized for every key (the source text is its own identity
/// and carries no separate translation). Missing cells read as empty-string
/// translations. Rows whose cells are all empty are spreadsheet padding and
/// are skipped. On duplicate keys the last row wins.
pub fn from_sheet(
    rows: &[SheetRow],
    columns: &ColumnMap,
    mode: TranslationMode,
    source_language: &str,
) -> IndexMap<String, CatalogRecord> {
    let mut catalogs: IndexMap<String, CatalogRecord> = IndexMap::new();

    for row in rows {
        if row.iter().all(|cell| cell.is_empty()) {
            continue;
        }

        let key = row.first().cloned().unwrap_or_default();

        if !mode.is_forced() {
            catalogs
                .entry(source_language.to_string())
                .or_default()
                .insert(key.clone(), String::new());
        }

        for (index, language) in columns {
            let value = row.get(*index).cloned().unwrap_or_default();
            catalogs
                .entry(language.clone())
                .or_default()
                .insert(key.clone(), value);
        }
    }

    catalogs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(category: &str, languages: &[(&str, &[(&str, &str)])]) -> CategoryMatrix {
        let mut matrix = CategoryMatrix::new(category.to_string());
        for (language, entries) in languages {
            let mut record = CatalogRecord::new();
            for (key, value) in *entries {
                record.insert(key.to_string(), value.to_string());
            }
            matrix.add_language(language.to_string(), record);
        }
        matrix
    }

    #[test]
    fn test_source_keyed_header_source_first() {
        // Discovery order has de first; the source language still wins
        // column 0.
        let matrix = matrix(
            "app",
            &[
                ("de", &[("Language", "Sprache")]),
                ("en-US", &[("Language", "Language")]),
            ],
        );

        let rows = to_sheet(&matrix, TranslationMode::SourceKeyed, "en-US");
        assert_eq!(rows[0], ["en-US", "de"]);
    }

    #[test]
    fn test_forced_header_key_first() {
        let matrix = matrix(
            "app",
            &[
                ("de", &[("greeting", "Hallo")]),
                ("en-US", &[("greeting", "Hello")]),
            ],
        );

        let rows = to_sheet(&matrix, TranslationMode::Forced, "en-US");
        assert_eq!(rows[0], ["key", "de", "en-US"]);
    }

    #[test]
    fn test_source_keyed_data_rows() {
        let matrix = matrix(
            "app",
            &[
                ("en-US", &[("Language", "Language")]),
                ("de", &[("Language", "Sprache")]),
            ],
        );

        let rows = to_sheet(&matrix, TranslationMode::SourceKeyed, "en-US");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], ["Language", "Sprache"]);
    }

    #[test]
    fn test_forced_data_rows_include_source_column() {
        let matrix = matrix(
            "app",
            &[
                ("en-US", &[("greeting", "Hello")]),
                ("de", &[("greeting", "Hallo")]),
            ],
        );

        let rows = to_sheet(&matrix, TranslationMode::Forced, "en-US");
        assert_eq!(rows[0], ["key", "en-US", "de"]);
        assert_eq!(rows[1], ["greeting", "Hello", "Hallo"]);
    }

    #[test]
    fn test_missing_translation_becomes_empty_cell() {
        let matrix = matrix(
            "app",
            &[
                ("en-US", &[("Language", "Language"), ("Close", "Close")]),
                ("de", &[("Language", "Sprache")]),
            ],
        );

        let rows = to_sheet(&matrix, TranslationMode::SourceKeyed, "en-US");
        assert_eq!(rows[2], ["Close", ""]);
    }

    #[test]
    fn test_keys_only_in_other_languages_never_surface() {
        let matrix = matrix(
            "app",
            &[
                ("en-US", &[("Language", "Language")]),
                ("de", &[("Language", "Sprache"), ("Extra", "Zusatz")]),
            ],
        );

        let rows = to_sheet(&matrix, TranslationMode::SourceKeyed, "en-US");
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|row| row[0] != "Extra"));
    }

    #[test]
    fn test_missing_source_language_yields_header_only() {
        let matrix = matrix("app", &[("de", &[("Language", "Sprache")])]);

        let rows = to_sheet(&matrix, TranslationMode::SourceKeyed, "en-US");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0], ["en-US", "de"]);
    }

    #[test]
    fn test_source_record_order_drives_row_order() {
        let matrix = matrix(
            "app",
            &[(
                "en-US",
                &[("zebra", "Zebra"), ("apple", "Apple"), ("mango", "Mango")],
            )],
        );

        let rows = to_sheet(&matrix, TranslationMode::SourceKeyed, "en-US");
        let keys: Vec<&str> = rows[1..].iter().map(|r| r[0].as_str()).collect();
        assert_eq!(keys, ["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_from_sheet_source_keyed_synthesizes_empty_source_entry() {
        let rows = vec![vec!["Language".to_string(), "Sprache".to_string()]];
        let columns: ColumnMap = vec![(1, "de".to_string())];

        let catalogs = from_sheet(&rows, &columns, TranslationMode::SourceKeyed, "en-US");

        assert_eq!(catalogs["en-US"]["Language"], "");
        assert_eq!(catalogs["de"]["Language"], "Sprache");
    }

    #[test]
    fn test_from_sheet_forced_has_no_synthesized_source_entry() {
        let rows = vec![vec![
            "greeting".to_string(),
            "Hallo".to_string(),
            "Hello".to_string(),
        ]];
        let columns: ColumnMap = vec![(1, "de".to_string()), (2, "en-US".to_string())];

        let catalogs = from_sheet(&rows, &columns, TranslationMode::Forced, "en-US");

        assert_eq!(catalogs["de"]["greeting"], "Hallo");
        assert_eq!(catalogs["en-US"]["greeting"], "Hello");
        // The en-US entry came from its column, not from synthesis.
        assert_eq!(catalogs.len(), 2);
    }

    #[test]
    fn test_from_sheet_missing_trailing_cell_is_empty_translation() {
        let rows = vec![vec!["Language".to_string()]];
        let columns: ColumnMap = vec![(1, "de".to_string())];

        let catalogs = from_sheet(&rows, &columns, TranslationMode::SourceKeyed, "en-US");

        assert_eq!(catalogs["de"]["Language"], "");
    }

    #[test]
    fn test_from_sheet_skips_all_empty_rows() {
        let rows = vec![
            vec!["Language".to_string(), "Sprache".to_string()],
            vec![String::new(), String::new()],
        ];
        let columns: ColumnMap = vec![(1, "de".to_string())];

        let catalogs = from_sheet(&rows, &columns, TranslationMode::SourceKeyed, "en-US");

        assert_eq!(catalogs["de"].len(), 1);
    }

    #[test]
    fn test_from_sheet_duplicate_keys_last_wins() {
        let rows = vec![
            vec!["Language".to_string(), "Sprak".to_string()],
            vec!["Language".to_string(), "Sprache".to_string()],
        ];
        let columns: ColumnMap = vec![(1, "de".to_string())];

        let catalogs = from_sheet(&rows, &columns, TranslationMode::SourceKeyed, "en-US");

        assert_eq!(catalogs["de"].len(), 1);
        assert_eq!(catalogs["de"]["Language"], "Sprache");
    }

    #[test]
    fn test_roundtrip_source_keyed() {
        let matrix = matrix(
            "app",
            &[
                ("en-US", &[("Language", "Language"), ("Close", "Close")]),
                ("de", &[("Language", "Sprache"), ("Close", "Schließen")]),
            ],
        );

        let rows = to_sheet(&matrix, TranslationMode::SourceKeyed, "en-US");
        let columns: ColumnMap = rows[0]
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, lang)| (i, lang.clone()))
            .collect();
        let catalogs = from_sheet(&rows[1..], &columns, TranslationMode::SourceKeyed, "en-US");

        assert_eq!(catalogs["de"]["Language"], "Sprache");
        assert_eq!(catalogs["de"]["Close"], "Schließen");
        let keys: Vec<&String> = catalogs["en-US"].keys().collect();
        assert_eq!(keys, ["Language", "Close"]);
    }
}
