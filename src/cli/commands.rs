use crate::catalog::FsCatalogStore;
use crate::config::SyncConfig;
use crate::core;
use crate::error::{SyncError, SyncResult};
use crate::excel::{WorkbookExporter, WorkbookImporter};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the workbook written into the output directory.
pub const WORKBOOK_FILENAME: &str = "translations.xlsx";

/// Config file picked up from the working directory when `--config` is not
/// given.
const DEFAULT_CONFIG_FILE: &str = "translations.yml";

/// Resolve the effective configuration from the CLI options.
fn load_config(
    config_path: Option<PathBuf>,
    source_language: Option<String>,
) -> SyncResult<SyncConfig> {
    let mut config = match config_path {
        Some(path) => SyncConfig::load(&path)?,
        None => {
            let default = Path::new(DEFAULT_CONFIG_FILE);
            if default.is_file() {
                SyncConfig::load(default)?
            } else {
                SyncConfig::default()
            }
        }
    };

    if let Some(language) = source_language {
        config.source_language = language;
    }

    Ok(config)
}

/// Execute the export command
pub fn export(
    output_dir: Option<PathBuf>,
    message_path: PathBuf,
    config_path: Option<PathBuf>,
    source_language: Option<String>,
    verbose: bool,
) -> SyncResult<()> {
    let config = load_config(config_path, source_language)?;
    let output_dir = output_dir.unwrap_or_else(|| PathBuf::from("."));
    let filename = output_dir.join(WORKBOOK_FILENAME);

    println!("{}", "🌐 Langsheet - Exporting translations".bold().green());
    println!("   Messages: {}", message_path.display());
    println!("   Output:   {}\n", filename.display().to_string().cyan());

    fs::create_dir_all(&output_dir)?;

    if verbose {
        println!("{}", "📖 Collecting catalogs...".cyan());
    }

    let store = FsCatalogStore::new(&message_path);
    let matrices = core::collect_matrices(&store)?;

    if verbose {
        for matrix in &matrices {
            println!(
                "   📄 {} ({} languages)",
                matrix.category.bright_blue(),
                matrix.languages.len()
            );
        }
        println!();
    }

    let sheets = core::build_sheets(&matrices, &config);

    if verbose {
        println!("{}", "📊 Writing workbook...".cyan());
    }

    WorkbookExporter::new(sheets).export(&filename)?;

    println!("{}", "✅ Export complete!".bold().green());
    println!("   Workbook: {}\n", filename.display());

    Ok(())
}

/// Execute the import command
pub fn import(
    source: Option<PathBuf>,
    message_path: PathBuf,
    config_path: Option<PathBuf>,
    source_language: Option<String>,
    sort: bool,
    verbose: bool,
) -> SyncResult<()> {
    let source = source
        .filter(|path| !path.as_os_str().is_empty())
        .ok_or_else(|| SyncError::Usage("Source file cannot be empty.".to_string()))?;

    if !source.is_file() {
        return Err(SyncError::SourceNotFound(source));
    }

    let config = load_config(config_path, source_language)?;

    println!("{}", "🌐 Langsheet - Importing translations".bold().green());
    println!("   Source:   {}", source.display());
    println!("   Messages: {}\n", message_path.display());

    if verbose {
        println!("{}", "📖 Reading workbook...".cyan());
    }

    let sheets = WorkbookImporter::new(&source).import()?;

    if verbose {
        for sheet in &sheets {
            println!(
                "   📄 {} ({} rows)",
                sheet.title.bright_blue(),
                sheet.data_rows().len()
            );
        }
        println!();
    }

    let mut store = FsCatalogStore::new(&message_path);
    let summary = core::apply_sheets(&mut store, &sheets, &config, sort)?;

    println!("{}", "✅ Import complete!".bold().green());
    println!(
        "   {} worksheets processed, {} catalogs updated\n",
        summary.sheets, summary.records
    );

    Ok(())
}
