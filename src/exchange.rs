//! `.codekit` exchange files
//!
//! One snippet per file, as a JSON object:
//!
//! ```json
//! {
//!     "title": "Reverse a string",
//!     "language": "python",
//!     "code": "s[::-1]",
//!     "category": "Strings",
//!     "version": "3.12"
//! }
//! ```
//!
//! Older producers wrote `code_content` instead of `code` and `category_origin`
//! instead of `category`; decoding accepts both spellings. Encoding always
//! writes the canonical keys.
//!
//! Single-file import always lands as a custom snippet. Batch sync reconciles
//! files as system snippets, and seeding adds them as system snippets without
//! looking for duplicates.

use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use crate::snippet::{Reconciled, Snippet, SnippetDraft};
use crate::storage::SqliteStore;
use crate::{Error, Result};

/// File extension of exchange files, without the dot
pub const EXTENSION: &str = "codekit";

/// Canonical content of one exchange file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExchangeRecord {
    pub title: String,
    pub language: String,
    pub code: String,
    pub category: String,
    pub version: String,
}

impl ExchangeRecord {
    /// Project a stored snippet; the id is not carried over
    pub fn from_snippet(snippet: &Snippet) -> Self {
        Self {
            title: snippet.title.clone(),
            language: snippet.language.clone(),
            code: snippet.code_content.clone(),
            category: snippet.category_name.clone(),
            version: snippet.version.clone(),
        }
    }

    /// File name used when exporting into a directory
    pub fn file_name(&self) -> String {
        let stem: String = self
            .title
            .trim()
            .chars()
            .map(|c| if c == ' ' || c == '/' || c == '\\' { '_' } else { c })
            .collect();
        format!("{stem}.{EXTENSION}")
    }
}

impl From<ExchangeRecord> for SnippetDraft {
    fn from(record: ExchangeRecord) -> Self {
        SnippetDraft {
            category: record.category,
            title: record.title,
            language: record.language,
            code: record.code,
            version: record.version,
        }
    }
}

/// Every key any producer has written, before normalization
#[derive(Debug, Default, Deserialize)]
struct RawRecord {
    title: Option<String>,
    language: Option<String>,
    code: Option<String>,
    code_content: Option<String>,
    category: Option<String>,
    category_origin: Option<String>,
    version: Option<serde_json::Value>,
}

impl RawRecord {
    fn normalize(self) -> Result<ExchangeRecord> {
        let code = self.code.or(self.code_content);
        let category = self.category.or(self.category_origin);

        let (title, language, code, category) = match (self.title, self.language, code, category) {
            (Some(title), Some(language), Some(code), Some(category)) => (title, language, code, category),
            (title, language, code, category) => {
                let missing: Vec<&str> = [
                    ("title", title.is_none()),
                    ("language", language.is_none()),
                    ("code", code.is_none()),
                    ("category", category.is_none()),
                ]
                .into_iter()
                .filter_map(|(name, absent)| absent.then_some(name))
                .collect();
                return Err(Error::Format(format!("missing field(s): {}", missing.join(", "))));
            }
        };

        if title.trim().is_empty() {
            return Err(Error::Format("title is empty".to_string()));
        }
        if category.trim().is_empty() {
            return Err(Error::Format("category is empty".to_string()));
        }

        // Hand-written kits sometimes carry `"version": 2.0`
        let version = match self.version {
            None | Some(serde_json::Value::Null) => String::new(),
            Some(serde_json::Value::String(s)) => s,
            Some(serde_json::Value::Number(n)) => n.to_string(),
            Some(other) => return Err(Error::Format(format!("version must be a string, got {other}"))),
        };

        Ok(ExchangeRecord { title, language, code, category, version })
    }
}

/// Parse and normalize the content of an exchange file
pub fn decode(bytes: &[u8]) -> Result<ExchangeRecord> {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    let raw: RawRecord = serde_json::from_slice(bytes).map_err(|e| Error::Format(e.to_string()))?;
    raw.normalize()
}

/// Serialize a record as pretty JSON with canonical keys
pub fn encode(record: &ExchangeRecord) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    record.serialize(&mut ser)?;
    buf.push(b'\n');
    Ok(buf)
}

/// Read and decode one exchange file
pub fn read_file(path: &Path) -> Result<ExchangeRecord> {
    let bytes = std::fs::read(path)?;
    decode(&bytes)
}

// ========== Store Operations ==========

/// Import exchange bytes as a custom snippet and return its id
pub fn import_bytes(store: &SqliteStore, bytes: &[u8]) -> Result<i64> {
    let record = decode(bytes)?;
    let id = store.add_custom(&record.into())?;
    Ok(id)
}

/// Import an exchange file as a custom snippet and return its id
pub fn import_file(store: &SqliteStore, path: &Path) -> Result<i64> {
    let bytes = std::fs::read(path)?;
    let id = import_bytes(store, &bytes)?;
    tracing::info!(id, path = %path.display(), "Imported snippet");
    Ok(id)
}

/// Write a stored snippet to an exchange file.
///
/// When `dest` is a directory the file is named after the snippet title.
/// Returns the path written.
pub fn export_snippet(store: &SqliteStore, id: i64, dest: &Path) -> Result<PathBuf> {
    let snippet = store.get_snippet(id)?.ok_or(Error::SnippetNotFound(id))?;
    let record = ExchangeRecord::from_snippet(&snippet);

    let path = if dest.is_dir() {
        dest.join(record.file_name())
    } else {
        dest.to_path_buf()
    };
    std::fs::write(&path, encode(&record)?)?;
    tracing::info!(id, path = %path.display(), "Exported snippet");
    Ok(path)
}

/// Exchange files directly inside `dir`, sorted by path
pub fn discover(dir: &Path) -> Result<Vec<PathBuf>> {
    let pattern = format!(
        "{}/*.{EXTENSION}",
        glob::Pattern::escape(&dir.to_string_lossy())
    );
    let entries = glob::glob(&pattern)
        .map_err(|e| Error::Io(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(glob::GlobError::into_error)?;
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// A file a batch could not apply
#[derive(Debug, Clone)]
pub struct SyncFailure {
    pub path: PathBuf,
    pub reason: String,
}

/// Outcome of a sync or seed batch
#[derive(Debug, Clone, Default)]
pub struct SyncReport {
    /// Files that became new system snippets
    pub inserted: usize,
    /// Files that rewrote existing system snippets
    pub updated: usize,
    pub failed: Vec<SyncFailure>,
}

impl SyncReport {
    /// Files applied successfully
    pub fn applied(&self) -> usize {
        self.inserted + self.updated
    }

    fn record_failure(&mut self, path: &Path, err: Error) {
        tracing::warn!(path = %path.display(), error = %err, "Skipping exchange file");
        self.failed.push(SyncFailure {
            path: path.to_path_buf(),
            reason: err.to_string(),
        });
    }
}

impl std::fmt::Display for SyncReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Sync Results:")?;
        writeln!(f, "  Inserted: {}", self.inserted)?;
        writeln!(f, "  Updated: {}", self.updated)?;
        write!(f, "  Failed: {}", self.failed.len())
    }
}

/// Reconcile each file as a system snippet (kit sync)
pub fn sync_files(store: &SqliteStore, paths: &[PathBuf]) -> SyncReport {
    sync_files_with_progress(store, paths, |_| {})
}

/// [`sync_files`], calling `progress` after each file
pub fn sync_files_with_progress(
    store: &SqliteStore,
    paths: &[PathBuf],
    mut progress: impl FnMut(&Path),
) -> SyncReport {
    let mut report = SyncReport::default();
    for path in paths {
        let outcome = read_file(path).and_then(|record| store.reconcile_system(&record.into()));
        match outcome {
            Ok(Reconciled::Inserted(_)) => report.inserted += 1,
            Ok(Reconciled::Updated(_)) => report.updated += 1,
            Err(e) => report.record_failure(path, e),
        }
        progress(path);
    }
    tracing::info!(
        inserted = report.inserted,
        updated = report.updated,
        failed = report.failed.len(),
        "Kit sync finished"
    );
    report
}

/// Add each file as a system snippet without duplicate checks (admin seeding)
pub fn seed_files_with_progress(
    store: &SqliteStore,
    paths: &[PathBuf],
    mut progress: impl FnMut(&Path),
) -> SyncReport {
    let mut report = SyncReport::default();
    for path in paths {
        match read_file(path).and_then(|record| store.add_system(&record.into())) {
            Ok(_) => report.inserted += 1,
            Err(e) => report.record_failure(path, e),
        }
        progress(path);
    }
    tracing::info!(inserted = report.inserted, failed = report.failed.len(), "Seeding finished");
    report
}

/// [`seed_files_with_progress`] without progress reporting
pub fn seed_files(store: &SqliteStore, paths: &[PathBuf]) -> SyncReport {
    seed_files_with_progress(store, paths, |_| {})
}
