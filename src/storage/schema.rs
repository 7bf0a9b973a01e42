//! Database schema definitions

/// SQL to create the categories table
pub const CREATE_CATEGORIES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS categories (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE,
    icon TEXT
)
"#;

/// SQL to create the snippets table
pub const CREATE_SNIPPETS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS snippets (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    category_id INTEGER,
    title TEXT NOT NULL,
    language TEXT NOT NULL,
    code_content TEXT NOT NULL,
    version TEXT DEFAULT '',
    is_custom INTEGER DEFAULT 0,
    FOREIGN KEY (category_id) REFERENCES categories (id)
)
"#;

/// A column added after the first release.
///
/// Databases created by older versions lack it; it is added in place with its default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub table: &'static str,
    pub name: &'static str,
    /// Type and default, as written after the column name in `ADD COLUMN`
    pub definition: &'static str,
}

impl ColumnSpec {
    pub fn add_column_sql(&self) -> String {
        format!("ALTER TABLE {} ADD COLUMN {} {}", self.table, self.name, self.definition)
    }
}

/// Columns that may be missing from databases written by older versions
pub const ADDITIVE_COLUMNS: &[ColumnSpec] = &[
    ColumnSpec { table: "snippets", name: "version", definition: "TEXT DEFAULT ''" },
    ColumnSpec { table: "snippets", name: "is_custom", definition: "INTEGER DEFAULT 0" },
];

/// All schema creation statements
pub fn all_schema_statements() -> Vec<&'static str> {
    vec![CREATE_CATEGORIES_TABLE, CREATE_SNIPPETS_TABLE]
}

/// Whether an `ALTER TABLE ... ADD COLUMN` failure means the column is already there
pub fn is_duplicate_column(err: &rusqlite::Error) -> bool {
    match err {
        rusqlite::Error::SqliteFailure(_, Some(msg)) => msg.starts_with("duplicate column name"),
        _ => false,
    }
}
