use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;
use langsheet::cli;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "langsheet")]
#[command(about = "Sync translation catalogs with an Excel workbook for human editing.")]
#[command(long_about = "Langsheet - Translation catalog / Excel synchronization

Pivots per-category, per-language message catalogs into one worksheet per
category (languages as columns) and merges edited workbooks back into the
catalogs on disk.

COMMANDS:
  export   - Catalogs to translations.xlsx, one sheet per category
  import   - Edited workbook back into the catalogs

CATALOG LAYOUT:
  <message-path>/<language>/<category>.yml
  e.g. messages/de/app.yml holding a flat key: translation mapping.

FORCED TRANSLATION:
  Configure per category (or '*' as default) in translations.yml:

  source_language: en-US
  categories:
    app:
      force_translation: true

  A forced category gets an opaque 'key' first column and a translation
  column for every language, the source language included. A non-forced
  category uses the source-language text itself as the row identity.

EXAMPLES:
  langsheet export                      # writes ./translations.xlsx
  langsheet export build/l10n           # writes build/l10n/translations.xlsx
  langsheet import translations.xlsx    # merge edits back, sorted keys
  langsheet import edited.xlsx --sort false")]
#[command(version)]
struct Cli {
    /// Root directory of the message catalogs (one subdirectory per language)
    #[arg(long, global = true, default_value = "messages")]
    message_path: PathBuf,

    /// Sort catalog keys alphabetically when writing
    #[arg(long, global = true, default_value_t = true, action = ArgAction::Set)]
    sort: bool,

    /// Configuration file (defaults to ./translations.yml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the configured source language
    #[arg(long, global = true)]
    source_language: Option<String>,

    /// Show verbose steps
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(long_about = "Export translation catalogs to Excel format.

Every category becomes one worksheet named after the category. The header
row lists the language columns; each following row is one message. The
source language's catalog defines which keys appear.

The worksheet is protected with all cells unlocked, so translators can edit
every translation but not reshape the grid; the header row is bold and
frozen in place.

EXAMPLE:
  langsheet export build/l10n --message-path messages")]
    /// Export translation catalogs to an Excel workbook
    Export {
        /// Directory for the generated translations.xlsx (created if
        /// missing, default: current directory)
        output_dir: Option<PathBuf>,
    },

    #[command(long_about = "Import translations from an edited Excel workbook.

Each worksheet is matched to its category by title and validated against
the active mode: a forced category must have 'key' as its first column, any
other category must have the source language there. A failed validation
aborts the whole import.

Imported translations are merged into the existing catalogs: edited values
win, keys missing from the workbook survive. With --sort (the default) the
written catalogs are ordered alphabetically by key.

EXAMPLE:
  langsheet import translations.xlsx --message-path messages")]
    /// Import translations from an edited Excel workbook
    Import {
        /// Path to the workbook to import
        source: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Export { output_dir } => cli::export(
            output_dir,
            cli.message_path,
            cli.config,
            cli.source_language,
            cli.verbose,
        ),

        Commands::Import { source } => cli::import(
            source,
            cli.message_path,
            cli.config,
            cli.source_language,
            cli.sort,
            cli.verbose,
        ),
    };

    if let Err(err) = result {
        eprintln!("{} {err}", "❌ Error:".bold().red());
        process::exit(err.exit_code());
    }
}
