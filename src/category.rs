//! Categories and the reserved personal bucket

use serde::{Deserialize, Serialize};

/// Name of the reserved bucket.
///
/// It exists as a real category row (custom snippets authored "into" it land
/// there), but listing it shows every custom snippet across all categories.
pub const RESERVED_BUCKET: &str = "Meus Snippets";

/// Icon of the reserved bucket
pub const RESERVED_BUCKET_ICON: &str = "📂";

/// Icon given to categories created lazily by a write path
pub const DEFAULT_ICON: &str = "📁";

/// Categories seeded into an empty store, in display order.
pub const DEFAULT_CATEGORIES: &[(&str, &str)] = &[
    ("Documentos", "📄"),
    ("Matemática", "🔢"),
    ("Strings", "🔤"),
    ("Datas", "📅"),
    ("Arrays", "📊"),
    ("Arquivos", "📁"),
    ("Redes", "🌐"),
    ("Segurança", "🔒"),
    ("Utilitários", "⚡"),
    ("Algoritmos", "🧠"),
    (RESERVED_BUCKET, RESERVED_BUCKET_ICON),
];

/// A snippet category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    /// Unique, non-empty
    pub name: String,
    /// Short display string, usually one emoji
    pub icon: String,
}

impl Category {
    /// Whether this is the reserved bucket
    pub fn is_reserved(&self) -> bool {
        is_reserved_name(&self.name)
    }
}

/// Whether `name` names the reserved bucket (exact match, as stored)
pub fn is_reserved_name(name: &str) -> bool {
    name == RESERVED_BUCKET
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_bucket_is_last_default() {
        let (name, icon) = DEFAULT_CATEGORIES[DEFAULT_CATEGORIES.len() - 1];
        assert_eq!(name, RESERVED_BUCKET);
        assert_eq!(icon, RESERVED_BUCKET_ICON);
    }

    #[test]
    fn test_default_names_unique() {
        let mut names: Vec<&str> = DEFAULT_CATEGORIES.iter().map(|(n, _)| *n).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), DEFAULT_CATEGORIES.len());
    }

    #[test]
    fn test_is_reserved() {
        let cat = Category { id: 11, name: RESERVED_BUCKET.to_string(), icon: "📂".into() };
        assert!(cat.is_reserved());
        assert!(!is_reserved_name("meus snippets"));
    }
}
