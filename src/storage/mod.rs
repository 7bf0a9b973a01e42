//! Storage Layer - SQLite-backed persistence
//!
//! System of record is SQLite with tables:
//! - categories(id, name, icon)
//! - snippets(id, category_id, title, language, code_content, version, is_custom)

pub mod schema;
pub mod sqlite;

pub use schema::ColumnSpec;
pub use sqlite::{DbStats, SqliteStore};
