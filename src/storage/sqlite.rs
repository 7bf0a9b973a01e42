//! SQLite storage implementation

use std::path::Path;
use rusqlite::{Connection, OptionalExtension, params};
use crate::{Result, Error};
use crate::category::{Category, DEFAULT_CATEGORIES, DEFAULT_ICON, RESERVED_BUCKET, RESERVED_BUCKET_ICON, is_reserved_name};
use crate::snippet::{EditOutcome, Reconciled, Snippet, SnippetDraft, SnippetView};
use super::schema::{self, ColumnSpec};

/// Columns selected for every snippet read, in `row_to_snippet` order
const SNIPPET_SELECT: &str = r#"
SELECT s.id, s.category_id, c.name, s.title, s.language, s.code_content, s.version, s.is_custom
FROM snippets s
JOIN categories c ON s.category_id = c.id
"#;

/// SQLite-backed storage for categories and snippets
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open a database file (creates if doesn't exist), upgrade it and seed defaults
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path).map_err(Error::Initialization)?;
        Self::initialize(conn)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(Error::Initialization)?;
        Self::initialize(conn)
    }

    fn initialize(conn: Connection) -> Result<Self> {
        conn.pragma_update(None, "foreign_keys", true)
            .map_err(Error::Initialization)?;
        let store = Self { conn };
        store.ensure_schema()?;
        store.ensure_columns(schema::ADDITIVE_COLUMNS)?;
        store.seed_defaults()?;
        Ok(store)
    }

    // ========== Schema Operations ==========

    /// Create both tables if absent
    pub fn ensure_schema(&self) -> Result<()> {
        for stmt in schema::all_schema_statements() {
            self.conn.execute(stmt, []).map_err(Error::Initialization)?;
        }
        Ok(())
    }

    /// Add columns missing from databases written by older versions.
    ///
    /// A column that already exists counts as added.
    pub fn ensure_columns(&self, columns: &[ColumnSpec]) -> Result<()> {
        for column in columns {
            match self.conn.execute(&column.add_column_sql(), []) {
                Ok(_) => tracing::info!(table = column.table, column = column.name, "Added missing column"),
                Err(e) if schema::is_duplicate_column(&e) => {}
                Err(e) => return Err(Error::Initialization(e)),
            }
        }
        Ok(())
    }

    /// Insert the default categories into an empty store.
    ///
    /// Returns how many rows were inserted; 0 when categories already exist.
    pub fn seed_defaults(&self) -> Result<usize> {
        if self.count_categories()? > 0 {
            return Ok(0);
        }

        let mut inserted = 0;
        for (name, icon) in DEFAULT_CATEGORIES {
            inserted += self.conn.execute(
                "INSERT OR IGNORE INTO categories (name, icon) VALUES (?1, ?2)",
                params![name, icon],
            )?;
        }
        tracing::info!(inserted, "Seeded default categories");
        Ok(inserted)
    }

    // ========== Category Operations ==========

    /// All categories in creation order
    pub fn list_categories(&self) -> Result<Vec<Category>> {
        let mut stmt = self.conn.prepare("SELECT id, name, icon FROM categories ORDER BY id")?;
        let categories = stmt
            .query_map([], |row| self.row_to_category(row))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(categories)
    }

    /// Find a category by exact name
    pub fn find_category(&self, name: &str) -> Result<Option<Category>> {
        self.conn
            .query_row(
                "SELECT id, name, icon FROM categories WHERE name = ?1",
                [name],
                |row| self.row_to_category(row),
            )
            .optional()
            .map_err(Into::into)
    }

    /// Id of the named category, creating it with the generic icon if needed
    pub fn get_or_create_category(&self, name: &str) -> Result<i64> {
        self.ensure_category(name, DEFAULT_ICON)
    }

    /// Id of the reserved bucket, looked up on every call.
    ///
    /// Re-created with its own icon if it went missing.
    pub fn reserved_bucket_id(&self) -> Result<i64> {
        self.ensure_category(RESERVED_BUCKET, RESERVED_BUCKET_ICON)
    }

    fn ensure_category(&self, name: &str, icon: &str) -> Result<i64> {
        if name.trim().is_empty() {
            return Err(Error::InvalidCategory(name.to_string()));
        }

        if let Some(category) = self.find_category(name)? {
            return Ok(category.id);
        }

        // OR IGNORE: a row with this name may have appeared since the lookup
        self.conn.execute(
            "INSERT OR IGNORE INTO categories (name, icon) VALUES (?1, ?2)",
            params![name, icon],
        )?;
        let id: i64 = self.conn.query_row(
            "SELECT id FROM categories WHERE name = ?1",
            [name],
            |row| row.get(0),
        )?;
        tracing::debug!(id, name, "Created category");
        Ok(id)
    }

    /// Category for user-owned writes: the reserved bucket name always maps to the bucket row
    fn resolve_custom_category(&self, name: &str) -> Result<i64> {
        if is_reserved_name(name) {
            self.reserved_bucket_id()
        } else {
            self.get_or_create_category(name)
        }
    }

    /// Count all categories
    pub fn count_categories(&self) -> Result<usize> {
        let count: i64 = self.conn.query_row("SELECT COUNT(*) FROM categories", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    fn row_to_category(&self, row: &rusqlite::Row) -> rusqlite::Result<Category> {
        Ok(Category {
            id: row.get(0)?,
            name: row.get(1)?,
            icon: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        })
    }

    // ========== Snippet Reads ==========

    /// Snippets shown by a view, oldest first
    pub fn list_snippets(&self, view: &SnippetView) -> Result<Vec<Snippet>> {
        let snippets = match view {
            SnippetView::AllCustom => {
                let sql = format!("{SNIPPET_SELECT} WHERE s.is_custom = 1 ORDER BY s.id");
                let mut stmt = self.conn.prepare(&sql)?;
                stmt.query_map([], |row| self.row_to_snippet(row))?
                    .collect::<rusqlite::Result<Vec<_>>>()?
            }
            SnippetView::ByCategory(name) => {
                let sql = format!("{SNIPPET_SELECT} WHERE c.name = ?1 ORDER BY s.id");
                let mut stmt = self.conn.prepare(&sql)?;
                stmt.query_map([name], |row| self.row_to_snippet(row))?
                    .collect::<rusqlite::Result<Vec<_>>>()?
            }
        };
        Ok(snippets)
    }

    /// Snippets listed under a category name; the reserved bucket lists every custom snippet
    pub fn list_by_category(&self, category_name: &str) -> Result<Vec<Snippet>> {
        self.list_snippets(&SnippetView::for_category(category_name))
    }

    /// Case-insensitive substring search over title, code and language.
    ///
    /// Custom snippets come first, then titles ascending.
    pub fn search_all(&self, query: &str) -> Result<Vec<Snippet>> {
        // SQLite's LIKE only folds ASCII case; match in Rust to fold accented titles too
        let needle = query.to_lowercase();
        let sql = format!("{SNIPPET_SELECT} ORDER BY s.is_custom DESC, s.title ASC");
        let mut stmt = self.conn.prepare(&sql)?;

        let matches = stmt
            .query_map([], |row| self.row_to_snippet(row))?
            .collect::<rusqlite::Result<Vec<_>>>()?
            .into_iter()
            .filter(|s| {
                s.title.to_lowercase().contains(&needle)
                    || s.code_content.to_lowercase().contains(&needle)
                    || s.language.to_lowercase().contains(&needle)
            })
            .collect();

        Ok(matches)
    }

    /// Get a snippet by id
    pub fn get_snippet(&self, id: i64) -> Result<Option<Snippet>> {
        let sql = format!("{SNIPPET_SELECT} WHERE s.id = ?1");
        self.conn
            .query_row(&sql, [id], |row| self.row_to_snippet(row))
            .optional()
            .map_err(Into::into)
    }

    /// Count all snippets
    pub fn count_all(&self) -> Result<usize> {
        let count: i64 = self.conn.query_row("SELECT COUNT(*) FROM snippets", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Count custom snippets
    pub fn count_custom(&self) -> Result<usize> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM snippets WHERE is_custom = 1",
            [],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }

    /// `Some(is_custom)` for an existing snippet, `None` otherwise
    fn snippet_origin(&self, id: i64) -> Result<Option<bool>> {
        let origin: Option<Option<i64>> = self.conn
            .query_row("SELECT is_custom FROM snippets WHERE id = ?1", [id], |row| row.get(0))
            .optional()?;
        Ok(origin.map(|flag| flag.unwrap_or(0) != 0))
    }

    /// Helper to convert a row to a Snippet
    fn row_to_snippet(&self, row: &rusqlite::Row) -> rusqlite::Result<Snippet> {
        Ok(Snippet {
            id: row.get(0)?,
            category_id: row.get(1)?,
            category_name: row.get(2)?,
            title: row.get(3)?,
            language: row.get(4)?,
            code_content: row.get(5)?,
            version: row.get::<_, Option<String>>(6)?.unwrap_or_default(),
            is_custom: row.get::<_, Option<i64>>(7)?.unwrap_or(0) != 0,
        })
    }

    // ========== Snippet Writes ==========

    fn insert_snippet(&self, category_id: i64, draft: &SnippetDraft, is_custom: bool) -> Result<i64> {
        self.conn.execute(
            r#"
            INSERT INTO snippets (category_id, title, language, code_content, version, is_custom)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
            params![
                category_id,
                draft.title,
                draft.language,
                draft.code,
                draft.version,
                is_custom as i64,
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        tracing::debug!(id, category_id, title = %draft.title, is_custom, "Inserted snippet");
        Ok(id)
    }

    /// Add a user-owned snippet and return its id.
    ///
    /// Naming the reserved bucket stores it in the bucket row itself.
    pub fn add_custom(&self, draft: &SnippetDraft) -> Result<i64> {
        let category_id = self.resolve_custom_category(&draft.category)?;
        self.insert_snippet(category_id, draft, true)
    }

    /// Add a system snippet and return its id. Does not look for duplicates.
    pub fn add_system(&self, draft: &SnippetDraft) -> Result<i64> {
        let category_id = self.get_or_create_category(&draft.category)?;
        self.insert_snippet(category_id, draft, false)
    }

    /// Upsert a system snippet by (category, title).
    ///
    /// Only rows with `is_custom = 0` are matched, so a custom snippet with the
    /// same title is never touched.
    pub fn reconcile_system(&self, draft: &SnippetDraft) -> Result<Reconciled> {
        let tx = self.conn.unchecked_transaction()?;
        let category_id = self.get_or_create_category(&draft.category)?;

        let updated = tx.execute(
            r#"
            UPDATE snippets
            SET code_content = ?1, version = ?2, language = ?3
            WHERE category_id = ?4 AND title = ?5 AND is_custom = 0
            "#,
            params![draft.code, draft.version, draft.language, category_id, draft.title],
        )?;

        let outcome = if updated == 0 {
            Reconciled::Inserted(self.insert_snippet(category_id, draft, false)?)
        } else {
            tracing::debug!(category_id, title = %draft.title, updated, "Updated system snippet");
            Reconciled::Updated(updated)
        };

        tx.commit()?;
        Ok(outcome)
    }

    /// Replace every field of a custom snippet, including its category.
    ///
    /// Returns `false` when no snippet has this id. System snippets are refused.
    pub fn update(&self, id: i64, draft: &SnippetDraft) -> Result<bool> {
        match self.snippet_origin(id)? {
            None => return Ok(false),
            Some(false) => return Err(Error::SystemSnippet(id)),
            Some(true) => {}
        }

        let category_id = self.resolve_custom_category(&draft.category)?;
        let changed = self.conn.execute(
            r#"
            UPDATE snippets
            SET category_id = ?1, title = ?2, language = ?3, code_content = ?4, version = ?5
            WHERE id = ?6
            "#,
            params![category_id, draft.title, draft.language, draft.code, draft.version, id],
        )?;
        tracing::debug!(id, category_id, "Updated snippet");
        Ok(changed > 0)
    }

    /// Delete a custom snippet.
    ///
    /// Returns `false` when no snippet has this id. System snippets are refused.
    pub fn delete(&self, id: i64) -> Result<bool> {
        match self.snippet_origin(id)? {
            None => return Ok(false),
            Some(false) => return Err(Error::SystemSnippet(id)),
            Some(true) => {}
        }

        let deleted = self.conn.execute("DELETE FROM snippets WHERE id = ?1", [id])?;
        tracing::debug!(id, "Deleted snippet");
        Ok(deleted > 0)
    }

    /// Apply an edit the way the shell does: custom snippets change in place,
    /// system snippets fork into a new custom snippet.
    pub fn save_edit(&self, id: i64, draft: &SnippetDraft) -> Result<EditOutcome> {
        match self.snippet_origin(id)? {
            None => Ok(EditOutcome::Missing(id)),
            Some(true) => {
                self.update(id, draft)?;
                Ok(EditOutcome::Updated(id))
            }
            Some(false) => {
                let fork = self.add_custom(draft)?;
                tracing::info!(original = id, fork, "Forked system snippet");
                Ok(EditOutcome::Forked { original: id, fork })
            }
        }
    }

    /// Get database statistics
    pub fn stats(&self) -> Result<DbStats> {
        let snippets = self.count_all()?;
        let custom = self.count_custom()?;
        Ok(DbStats {
            categories: self.count_categories()?,
            snippets,
            custom,
            system: snippets - custom,
        })
    }
}

/// Database statistics
#[derive(Debug, Clone)]
pub struct DbStats {
    pub categories: usize,
    pub snippets: usize,
    pub custom: usize,
    pub system: usize,
}

impl std::fmt::Display for DbStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Database Statistics:")?;
        writeln!(f, "  Categories: {}", self.categories)?;
        writeln!(f, "  Snippets: {}", self.snippets)?;
        writeln!(f, "  Custom: {}", self.custom)?;
        writeln!(f, "  System: {}", self.system)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(category: &str, title: &str, code: &str) -> SnippetDraft {
        SnippetDraft::new(category, title, "py", code)
    }

    fn titles(snippets: &[Snippet]) -> Vec<&str> {
        snippets.iter().map(|s| s.title.as_str()).collect()
    }

    #[test]
    fn test_seed_defaults_on_empty_store() {
        let store = SqliteStore::open_in_memory().unwrap();

        let categories = store.list_categories().unwrap();
        assert_eq!(categories.len(), DEFAULT_CATEGORIES.len());
        assert_eq!(categories[0].name, "Documentos");
        assert!(categories.iter().any(|c| c.is_reserved()));

        // Already populated: nothing to do
        assert_eq!(store.seed_defaults().unwrap(), 0);
        assert_eq!(store.count_categories().unwrap(), DEFAULT_CATEGORIES.len());
    }

    #[test]
    fn test_ensure_steps_are_idempotent() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.ensure_schema().unwrap();
        store.ensure_columns(schema::ADDITIVE_COLUMNS).unwrap();
        assert_eq!(store.count_categories().unwrap(), DEFAULT_CATEGORIES.len());
    }

    #[test]
    fn test_get_or_create_category() {
        let store = SqliteStore::open_in_memory().unwrap();

        let first = store.get_or_create_category("Shell").unwrap();
        let second = store.get_or_create_category("Shell").unwrap();
        assert_eq!(first, second);

        let shell = store.find_category("Shell").unwrap().unwrap();
        assert_eq!(shell.icon, DEFAULT_ICON);
        assert_eq!(store.count_categories().unwrap(), DEFAULT_CATEGORIES.len() + 1);

        let existing = store.get_or_create_category("Strings").unwrap();
        assert_eq!(store.find_category("Strings").unwrap().unwrap().id, existing);
    }

    #[test]
    fn test_blank_category_rejected() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert!(matches!(store.get_or_create_category("  "), Err(Error::InvalidCategory(_))));
        assert!(matches!(store.add_custom(&draft("", "T", "x")), Err(Error::InvalidCategory(_))));
    }

    #[test]
    fn test_add_custom_visible_in_category_and_bucket() {
        let store = SqliteStore::open_in_memory().unwrap();

        let id = store.add_custom(&draft("Strings", "Reverse", "s[::-1]")).unwrap();
        let snippet = store.get_snippet(id).unwrap().unwrap();
        assert!(snippet.is_custom);
        assert_eq!(snippet.category_name, "Strings");

        assert_eq!(titles(&store.list_by_category("Strings").unwrap()), ["Reverse"]);
        assert_eq!(titles(&store.list_by_category(RESERVED_BUCKET).unwrap()), ["Reverse"]);
    }

    #[test]
    fn test_add_custom_into_reserved_bucket() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.add_system(&draft("Arrays", "Flatten", "sum(xs, [])")).unwrap();

        let id = store.add_custom(&draft(RESERVED_BUCKET, "T", "print(1)")).unwrap();

        let bucket = store.list_by_category(RESERVED_BUCKET).unwrap();
        assert_eq!(bucket.len(), 1);
        assert_eq!(bucket[0].id, id);
        assert_eq!(bucket[0].category_id, store.reserved_bucket_id().unwrap());
    }

    #[test]
    fn test_reserved_bucket_recreated_when_missing() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.conn.execute("DELETE FROM categories WHERE name = ?1", [RESERVED_BUCKET]).unwrap();

        let id = store.add_custom(&draft(RESERVED_BUCKET, "T", "x")).unwrap();
        let bucket = store.find_category(RESERVED_BUCKET).unwrap().unwrap();
        assert_eq!(bucket.icon, RESERVED_BUCKET_ICON);
        assert_eq!(store.get_snippet(id).unwrap().unwrap().category_id, bucket.id);
    }

    #[test]
    fn test_add_custom_creates_unknown_category() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.add_custom(&draft("Docker", "Prune", "docker system prune")).unwrap();
        assert!(store.find_category("Docker").unwrap().is_some());
    }

    #[test]
    fn test_system_inserts_are_not_custom() {
        let store = SqliteStore::open_in_memory().unwrap();

        let a = store.add_system(&draft("Datas", "Now", "now()")).unwrap();
        let b = store.add_system(&draft("Datas", "Now", "now()")).unwrap();
        assert_ne!(a, b);

        let listed = store.list_by_category("Datas").unwrap();
        assert_eq!(listed.len(), 2);
        assert!(listed.iter().all(|s| !s.is_custom));
        assert!(store.list_snippets(&SnippetView::AllCustom).unwrap().is_empty());
    }

    #[test]
    fn test_reconcile_inserts_then_updates() {
        let store = SqliteStore::open_in_memory().unwrap();

        let first = store
            .reconcile_system(&draft("Utilitários", "Helper", "v2-code").with_version("2.0"))
            .unwrap();
        assert!(matches!(first, Reconciled::Inserted(_)));

        let second = store
            .reconcile_system(&draft("Utilitários", "Helper", "v3-code").with_version("3.0"))
            .unwrap();
        assert_eq!(second, Reconciled::Updated(1));

        let rows = store.list_by_category("Utilitários").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].code_content, "v3-code");
        assert_eq!(rows[0].version, "3.0");
        assert!(!rows[0].is_custom);
    }

    #[test]
    fn test_reconcile_identical_twice_keeps_one_row() {
        let store = SqliteStore::open_in_memory().unwrap();
        let d = draft("Redes", "Ping", "ping").with_version("1.0");

        store.reconcile_system(&d).unwrap();
        store.reconcile_system(&d).unwrap();

        assert_eq!(store.list_by_category("Redes").unwrap().len(), 1);
        assert_eq!(store.count_all().unwrap(), 1);
    }

    #[test]
    fn test_reconcile_never_touches_custom_rows() {
        let store = SqliteStore::open_in_memory().unwrap();
        let custom = store.add_custom(&draft("Strings", "Slugify", "mine")).unwrap();

        let outcome = store.reconcile_system(&draft("Strings", "Slugify", "theirs")).unwrap();
        assert!(matches!(outcome, Reconciled::Inserted(_)));

        assert_eq!(store.get_snippet(custom).unwrap().unwrap().code_content, "mine");
        let rows = store.list_by_category("Strings").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows.iter().filter(|s| s.is_custom).count(), 1);
    }

    #[test]
    fn test_reconcile_matches_within_category_only() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.reconcile_system(&draft("Arrays", "Sort", "a")).unwrap();
        store.reconcile_system(&draft("Algoritmos", "Sort", "b")).unwrap();
        assert_eq!(store.count_all().unwrap(), 2);
    }

    #[test]
    fn test_search_filters_and_orders() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.add_system(&draft("Strings", "b foo system", "x")).unwrap();
        store.add_system(&draft("Strings", "a system", "call FOO()")).unwrap();
        store.add_custom(&draft("Strings", "z custom", "x")).unwrap();
        store.add_custom(&SnippetDraft::new("Strings", "y custom", "foolang", "x")).unwrap();
        store.add_system(&draft("Strings", "unrelated", "bar")).unwrap();

        let results = store.search_all("foo").unwrap();
        assert_eq!(titles(&results), ["y custom", "a system", "b foo system"]);
    }

    #[test]
    fn test_search_folds_non_ascii_case() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.add_custom(&draft("Matemática", "ÁREA do círculo", "pi * r ** 2")).unwrap();

        assert_eq!(store.search_all("área").unwrap().len(), 1);
        assert_eq!(store.search_all("").unwrap().len(), 1);
        assert!(store.search_all("%").unwrap().is_empty());
    }

    #[test]
    fn test_update_custom_repoints_category() {
        let store = SqliteStore::open_in_memory().unwrap();
        let id = store.add_custom(&draft("Strings", "Old", "x")).unwrap();

        let changed = store
            .update(id, &SnippetDraft::new("Arquivos", "New", "rust", "fs::read").with_version("1.80"))
            .unwrap();
        assert!(changed);

        let snippet = store.get_snippet(id).unwrap().unwrap();
        assert_eq!(snippet.category_name, "Arquivos");
        assert_eq!(snippet.title, "New");
        assert_eq!(snippet.language, "rust");
        assert_eq!(snippet.version, "1.80");
        assert!(snippet.is_custom);
    }

    #[test]
    fn test_update_and_delete_refuse_system_rows() {
        let store = SqliteStore::open_in_memory().unwrap();
        let id = store.add_system(&draft("Segurança", "Hash", "sha256")).unwrap();

        assert!(matches!(store.update(id, &draft("Segurança", "Hash", "md5")), Err(Error::SystemSnippet(x)) if x == id));
        assert!(matches!(store.delete(id), Err(Error::SystemSnippet(_))));
        assert_eq!(store.get_snippet(id).unwrap().unwrap().code_content, "sha256");
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert!(!store.update(999, &draft("Nova", "T", "x")).unwrap());
        assert!(!store.delete(999).unwrap());
        // No category created for a missing snippet
        assert!(store.find_category("Nova").unwrap().is_none());
    }

    #[test]
    fn test_delete_custom() {
        let store = SqliteStore::open_in_memory().unwrap();
        let id = store.add_custom(&draft("Strings", "Tmp", "x")).unwrap();
        assert!(store.delete(id).unwrap());
        assert!(store.get_snippet(id).unwrap().is_none());
        assert_eq!(store.count_all().unwrap(), 0);
    }

    #[test]
    fn test_save_edit_forks_system_snippet() {
        let store = SqliteStore::open_in_memory().unwrap();
        let system = store.add_system(&draft("Datas", "Parse", "strptime")).unwrap();

        let outcome = store.save_edit(system, &draft("Datas", "Parse", "my strptime")).unwrap();
        let EditOutcome::Forked { original, fork } = outcome else {
            panic!("expected a fork, got {outcome:?}");
        };
        assert_eq!(original, system);
        assert_eq!(store.get_snippet(system).unwrap().unwrap().code_content, "strptime");
        assert!(store.get_snippet(fork).unwrap().unwrap().is_custom);

        let custom = store.add_custom(&draft("Datas", "Mine", "x")).unwrap();
        assert_eq!(store.save_edit(custom, &draft("Datas", "Mine", "y")).unwrap(), EditOutcome::Updated(custom));
        assert_eq!(store.save_edit(4242, &draft("Datas", "Mine", "y")).unwrap(), EditOutcome::Missing(4242));
    }

    #[test]
    fn test_stats() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.add_custom(&draft("Strings", "A", "x")).unwrap();
        store.add_system(&draft("Strings", "B", "x")).unwrap();
        store.add_system(&draft("Strings", "C", "x")).unwrap();

        let stats = store.stats().unwrap();
        assert_eq!(stats.snippets, 3);
        assert_eq!(stats.custom, 1);
        assert_eq!(stats.system, 2);
        assert_eq!(stats.categories, DEFAULT_CATEGORIES.len());
    }
}
