//! # CodeKit - local snippet library
//!
//! Short code snippets organized into categories, kept in a single SQLite file.
//!
//! CodeKit provides:
//! - Category and snippet repositories over SQLite with additive schema upgrades
//! - A system/custom split: system snippets arrive through kit sync, custom ones are the user's
//! - Reconciliation that upserts system snippets by (category, title) without touching custom ones
//! - The `.codekit` exchange format for export, import and batch sync

pub mod category;
pub mod snippet;
pub mod storage;
pub mod exchange;
pub mod language;
pub mod output;
pub mod config;
pub mod ui;

// Re-exports for convenient access
pub use category::{Category, RESERVED_BUCKET};
pub use snippet::{EditOutcome, Reconciled, Snippet, SnippetDraft, SnippetView};
pub use exchange::{ExchangeRecord, SyncReport};
pub use storage::SqliteStore;

/// Result type alias for CodeKit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for CodeKit operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Schema creation or column migration failed; the store cannot be used.
    #[error("Schema initialization failed: {0}")]
    Initialization(#[source] rusqlite::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed or incomplete `.codekit` file.
    #[error("Invalid .codekit file: {0}")]
    Format(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid category name: {0:?}")]
    InvalidCategory(String),

    #[error("Snippet {0} is a system snippet and cannot be edited or deleted")]
    SystemSnippet(i64),

    #[error("Snippet not found: {0}")]
    SnippetNotFound(i64),
}
