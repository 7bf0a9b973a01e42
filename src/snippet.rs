//! Snippet types
//!
//! Snippets come in two flavours:
//! - custom: authored or imported by the user, editable and deletable
//! - system: delivered by kit sync or seeding, replaced only by reconciliation

use crate::category::is_reserved_name;
use serde::{Deserialize, Serialize};

/// A stored snippet with its category name denormalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    pub id: i64,
    pub category_id: i64,
    /// Name of the category `category_id` points to
    pub category_name: String,
    pub title: String,
    /// Short language identifier (`python`, `rust`, ...)
    pub language: String,
    pub code_content: String,
    /// Free-form, empty when unknown
    pub version: String,
    /// `true` for user-owned snippets, `false` for system ones
    pub is_custom: bool,
}

impl Snippet {
    /// Display label used by listings
    pub fn origin_label(&self) -> &'static str {
        if self.is_custom { "custom" } else { "system" }
    }

    /// Draft carrying this snippet's current field values
    pub fn to_draft(&self) -> SnippetDraft {
        SnippetDraft {
            category: self.category_name.clone(),
            title: self.title.clone(),
            language: self.language.clone(),
            code: self.code_content.clone(),
            version: self.version.clone(),
        }
    }
}

/// Field values for every write path.
///
/// The category is referenced by name and resolved (or created) by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetDraft {
    pub category: String,
    pub title: String,
    pub language: String,
    pub code: String,
    #[serde(default)]
    pub version: String,
}

impl SnippetDraft {
    pub fn new(
        category: impl Into<String>,
        title: impl Into<String>,
        language: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            title: title.into(),
            language: language.into(),
            code: code.into(),
            version: String::new(),
        }
    }

    /// Builder: set the version
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }
}

/// Which snippets a listing shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnippetView {
    /// Snippets stored under the named category
    ByCategory(String),
    /// Every custom snippet, whatever its category
    AllCustom,
}

impl SnippetView {
    /// View for a category name picked in the shell.
    ///
    /// The reserved bucket maps to [`SnippetView::AllCustom`].
    pub fn for_category(name: &str) -> Self {
        if is_reserved_name(name) {
            SnippetView::AllCustom
        } else {
            SnippetView::ByCategory(name.to_string())
        }
    }
}

/// What [`reconcile_system`](crate::SqliteStore::reconcile_system) did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconciled {
    /// Existing system rows were rewritten (row count)
    Updated(usize),
    /// No system row matched; a new one was inserted with this id
    Inserted(i64),
}

/// What [`save_edit`](crate::SqliteStore::save_edit) did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// The custom snippet was updated in place
    Updated(i64),
    /// The target was a system snippet; the edit became a new custom snippet
    Forked { original: i64, fork: i64 },
    /// No snippet has this id
    Missing(i64),
}
