//! CodeKit CLI - command-line shell for the local snippet library

use anyhow::Context;
use clap::{Parser, Subcommand};
use codekit::config::{self, CodekitConfig};
use codekit::exchange;
use codekit::language;
use codekit::ui::{self, Icons};
use codekit::{EditOutcome, Error, RESERVED_BUCKET, SnippetDraft, SnippetView, SqliteStore};
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "codekit")]
#[command(version)]
#[command(about = "CodeKit - local snippet library")]
#[command(long_about = r#"
CodeKit keeps short code snippets organized into categories:
  • System kits delivered as .codekit files, kept up to date with `sync`
  • Your own snippets under any category, all visible under "Meus Snippets"
  • Export and import single snippets as .codekit files

Example usage:
  codekit init
  codekit add --category Strings --title "Reverse" --language Python --code "s[::-1]"
  codekit list --mine
  codekit sync ./kits
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the database file (overrides codekit.toml)
    #[arg(short, long, global = true)]
    database: Option<PathBuf>,

    /// Path to the config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the database, seed default categories and write codekit.toml
    Init {
        /// Overwrite an existing codekit.toml
        #[arg(long)]
        force: bool,
    },

    /// List categories with their snippet counts
    Categories,

    /// List the snippets of a category
    List {
        /// Category name ("Meus Snippets" lists every custom snippet)
        #[arg(required_unless_present = "mine")]
        category: Option<String>,

        /// List every custom snippet, whatever its category
        #[arg(long)]
        mine: bool,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Search titles, code and languages
    Search {
        /// Text to look for (case-insensitive)
        query: String,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print one snippet with its code
    Show {
        id: i64,
    },

    /// Add a custom snippet
    Add {
        /// Target category (created if unknown)
        #[arg(short, long, default_value = RESERVED_BUCKET)]
        category: String,

        #[arg(short, long)]
        title: String,

        /// Language name or identifier (Python, py, C#, ...)
        #[arg(short, long, default_value = "")]
        language: String,

        /// Code content
        #[arg(long, conflicts_with = "file", required_unless_present = "file")]
        code: Option<String>,

        /// Read the code content from a file
        #[arg(short, long)]
        file: Option<PathBuf>,

        #[arg(long, default_value = "")]
        version: String,
    },

    /// Edit a snippet; editing a system snippet saves a custom copy
    Edit {
        id: i64,

        #[arg(short, long)]
        category: Option<String>,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        language: Option<String>,

        #[arg(long, conflicts_with = "file")]
        code: Option<String>,

        /// Read the new code content from a file
        #[arg(short, long)]
        file: Option<PathBuf>,

        #[arg(long)]
        version: Option<String>,
    },

    /// Delete a custom snippet
    Delete {
        id: i64,
    },

    /// Write a snippet to a .codekit file
    Export {
        id: i64,

        /// Output file or directory
        #[arg(short, long, default_value = ".")]
        out: PathBuf,
    },

    /// Import a .codekit file as a custom snippet
    Import {
        file: PathBuf,
    },

    /// Update system snippets from a folder of .codekit files
    Sync {
        /// Folder to scan (defaults to sync_dir from codekit.toml)
        dir: Option<PathBuf>,

        /// Only apply these file names (repeatable)
        #[arg(long)]
        only: Vec<String>,
    },

    /// Add .codekit files as system snippets, without duplicate checks
    Seed {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// List the languages offered when authoring snippets
    Languages,

    /// Show statistics about the library
    Stats,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config_path = cli.config.clone().unwrap_or_else(config::default_config_path);
    let settings = config::load_config(Some(&config_path))?.unwrap_or_default();
    let cwd = std::env::current_dir()?;
    let database = settings.database_path(cli.database.as_deref(), &cwd);

    match cli.command {
        Commands::Init { force } => {
            let store = open_store(&database)?;
            let stats = store.stats()?;

            let written = CodekitConfig {
                database: Some(database.to_string_lossy().to_string()),
                sync_dir: settings.sync_dir.clone(),
            };
            match config::write_config(&config_path, &written, force) {
                Ok(()) => ui::info("Config", &config_path.display().to_string()),
                Err(e) => ui::warn(&e.to_string()),
            }

            ui::header("CodeKit library ready");
            ui::status(Icons::DATABASE, "Database", &database.display().to_string());
            ui::status(Icons::FOLDER, "Categories", &stats.categories.to_string());
            ui::status(Icons::PACKAGE, "Snippets", &stats.snippets.to_string());
        }

        Commands::Categories => {
            let store = open_store(&database)?;
            let mut rows = Vec::new();
            for category in store.list_categories()? {
                if category.is_reserved() {
                    continue;
                }
                let count = store.list_snippets(&SnippetView::ByCategory(category.name.clone()))?.len();
                rows.push((category, count));
            }

            println!("{}", ui::category_table(&rows));
            ui::summary_row(
                &format!("{} {}:", Icons::FOLDER, RESERVED_BUCKET),
                &store.count_custom()?.to_string(),
            );
            ui::summary_row(&format!("{} Total:", Icons::STATS), &store.count_all()?.to_string());
        }

        Commands::List { category, mine, json } => {
            let store = open_store(&database)?;
            let view = match (mine, category) {
                (true, _) => SnippetView::AllCustom,
                (false, Some(name)) => SnippetView::for_category(&name),
                (false, None) => SnippetView::AllCustom,
            };
            let snippets = store.list_snippets(&view)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&snippets)?);
            } else if snippets.is_empty() {
                println!("∅ No snippets found.");
            } else {
                println!("{}", ui::snippet_table(&snippets));
            }
        }

        Commands::Search { query, json } => {
            let store = open_store(&database)?;
            let results = store.search_all(&query)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else if results.is_empty() {
                println!("{} No snippets match '{}'.", Icons::SEARCH, query);
            } else {
                println!("{} {} result(s) for '{}'", Icons::SEARCH, results.len(), query);
                println!("{}", ui::snippet_table(&results));
            }
        }

        Commands::Show { id } => {
            let store = open_store(&database)?;
            let snippet = store.get_snippet(id)?.ok_or(Error::SnippetNotFound(id))?;
            let language = language::display_name(&snippet.language)
                .map(str::to_string)
                .unwrap_or_else(|| snippet.language.to_uppercase());

            println!(
                "{} {}  {}",
                Icons::FILE,
                snippet.title.bold(),
                ui::origin_badge(snippet.is_custom)
            );
            ui::summary_row("Category:", &snippet.category_name);
            ui::summary_row("Language:", &language);
            if !snippet.version.is_empty() {
                ui::summary_row("Version:", &snippet.version);
            }
            ui::section("Code");
            println!("{}", snippet.code_content.style(ui::theme().code.clone()));
        }

        Commands::Add { category, title, language, code, file, version } => {
            let store = open_store(&database)?;
            let code = read_code(code, file.as_deref())?
                .context("either --code or --file is required")?;
            let draft = SnippetDraft::new(category, title, language::resolve(&language), code)
                .with_version(version);

            let id = store.add_custom(&draft)?;
            ui::success(&format!("Added '{}' to {} (id {})", draft.title, draft.category, id));
        }

        Commands::Edit { id, category, title, language, code, file, version } => {
            let store = open_store(&database)?;
            let current = store.get_snippet(id)?.ok_or(Error::SnippetNotFound(id))?;

            let mut draft = current.to_draft();
            if let Some(category) = category {
                draft.category = category;
            }
            if let Some(title) = title {
                draft.title = title;
            }
            if let Some(language) = language {
                draft.language = language::resolve(&language);
            }
            if let Some(code) = read_code(code, file.as_deref())? {
                draft.code = code;
            }
            if let Some(version) = version {
                draft.version = version;
            }

            match store.save_edit(id, &draft)? {
                EditOutcome::Updated(id) => ui::success(&format!("Updated snippet {}", id)),
                EditOutcome::Forked { original, fork } => {
                    println!(
                        "{} Snippet {} is a system snippet; saved your changes as custom snippet {}",
                        Icons::FORK, original, fork
                    );
                }
                EditOutcome::Missing(id) => ui::warn(&format!("Snippet {} no longer exists", id)),
            }
        }

        Commands::Delete { id } => {
            let store = open_store(&database)?;
            match store.delete(id) {
                Ok(true) => ui::success(&format!("Deleted snippet {}", id)),
                Ok(false) => ui::warn(&format!("No snippet with id {}", id)),
                Err(Error::SystemSnippet(id)) => {
                    anyhow::bail!("{} Snippet {} is a system snippet and cannot be deleted", Icons::LOCK, id)
                }
                Err(e) => return Err(e.into()),
            }
        }

        Commands::Export { id, out } => {
            let store = open_store(&database)?;
            let path = exchange::export_snippet(&store, id, &out)?;
            println!("{} Exported to {}", Icons::OUTBOX, path.display());
        }

        Commands::Import { file } => {
            let store = open_store(&database)?;
            match exchange::import_file(&store, &file) {
                Ok(id) => {
                    let snippet = store.get_snippet(id)?.ok_or(Error::SnippetNotFound(id))?;
                    println!(
                        "{} Imported '{}' into {} (id {})",
                        Icons::INBOX, snippet.title, snippet.category_name, id
                    );
                }
                Err(e @ Error::Format(_)) => {
                    anyhow::bail!("Could not import {}: {}", file.display(), e)
                }
                Err(e) => return Err(e.into()),
            }
        }

        Commands::Sync { dir, only } => {
            let dir = dir
                .or_else(|| settings.sync_dir.as_ref().map(PathBuf::from))
                .context("no folder given and no sync_dir in codekit.toml")?;
            let store = open_store(&database)?;

            let mut files = exchange::discover(&dir)?;
            if !only.is_empty() {
                files.retain(|path| {
                    path.file_name()
                        .map(|name| only.iter().any(|o| name.to_string_lossy() == o.as_str()))
                        .unwrap_or(false)
                });
            }
            if files.is_empty() {
                ui::warn(&format!("No .codekit files found in {}", dir.display()));
                return Ok(());
            }

            ui::header(&format!("Syncing {} kit file(s) from {}", files.len(), dir.display()));
            let progress = ui::BatchProgress::new(files.len(), "Sync");
            let report = exchange::sync_files_with_progress(&store, &files, |path| progress.file_done(path));
            progress.finish();

            print_report(&report);
        }

        Commands::Seed { files } => {
            let store = open_store(&database)?;

            ui::header(&format!("Seeding {} file(s) as system snippets", files.len()));
            let progress = ui::BatchProgress::new(files.len(), "Seed");
            let report = exchange::seed_files_with_progress(&store, &files, |path| progress.file_done(path));
            progress.finish();

            print_report(&report);
        }

        Commands::Languages => {
            for (name, id) in language::LANGUAGES {
                println!("  {:<16} {}", name, ui::dim(id));
            }
        }

        Commands::Stats => {
            let store = open_store(&database)?;
            let stats = store.stats()?;

            println!("{} CodeKit Statistics ({})", Icons::STATS, ui::muted(&database.display().to_string()));
            let categories = stats.categories.to_string();
            let snippets = stats.snippets.to_string();
            let custom = stats.custom.to_string();
            let system = stats.system.to_string();
            println!(
                "{}",
                ui::stats_table(&[
                    ("Categories", categories.as_str()),
                    ("Snippets", snippets.as_str()),
                    ("Custom", custom.as_str()),
                    ("System", system.as_str()),
                ])
            );
        }
    }

    Ok(())
}

fn open_store(database: &Path) -> anyhow::Result<SqliteStore> {
    config::ensure_db_dir(database)?;
    tracing::debug!("Opening {}", database.display());
    SqliteStore::open(database)
        .with_context(|| format!("failed to open database {}", database.display()))
}

/// Code from `--code`, else from `--file`
fn read_code(code: Option<String>, file: Option<&Path>) -> anyhow::Result<Option<String>> {
    match (code, file) {
        (Some(code), _) => Ok(Some(code)),
        (None, Some(path)) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            Ok(Some(content))
        }
        (None, None) => Ok(None),
    }
}

fn print_report(report: &exchange::SyncReport) {
    println!();
    ui::success(&format!("{} snippet(s) applied", report.applied()));
    ui::summary_row(&format!("{} Inserted:", Icons::NEW), &report.inserted.to_string());
    ui::summary_row(&format!("{} Updated:", Icons::MOD), &report.updated.to_string());

    if !report.failed.is_empty() {
        ui::warn(&format!("{} file(s) failed", report.failed.len()));
        for failure in &report.failed {
            eprintln!("  {} {}: {}", Icons::CROSS, failure.path.display(), failure.reason);
        }
    }
}
