//! Language catalog
//!
//! Display names offered when authoring a snippet, mapped to the short
//! identifiers stored in `snippets.language`. The store itself accepts any
//! identifier; the catalog only normalizes user input.

/// `(display name, identifier)` pairs in display order
pub const LANGUAGES: &[(&str, &str)] = &[
    ("ActionScript", "as"),
    ("Ada", "ada"),
    ("Assembly", "asm"),
    ("Bash", "bash"),
    ("C", "c"),
    ("C#", "csharp"),
    ("C++", "cpp"),
    ("Clojure", "clojure"),
    ("CoffeeScript", "coffeescript"),
    ("CSS", "css"),
    ("Dart", "dart"),
    ("Delphi", "delphi"),
    ("Elixir", "elixir"),
    ("Erlang", "erlang"),
    ("Fortran", "fortran"),
    ("Go", "go"),
    ("Groovy", "groovy"),
    ("Haskell", "haskell"),
    ("HTML", "html"),
    ("Java", "java"),
    ("JavaScript", "javascript"),
    ("JSON", "json"),
    ("Julia", "julia"),
    ("Kotlin", "kotlin"),
    ("Lisp", "lisp"),
    ("Lua", "lua"),
    ("Markdown", "md"),
    ("Objective-C", "objective-c"),
    ("Pascal", "pascal"),
    ("Perl", "perl"),
    ("PHP", "php"),
    ("Portugol Studio", "portugol"),
    ("PowerShell", "powershell"),
    ("Python", "python"),
    ("R", "r"),
    ("Ruby", "ruby"),
    ("Rust", "rust"),
    ("Scala", "scala"),
    ("SQL", "sql"),
    ("Swift", "swift"),
    ("TypeScript", "typescript"),
    ("VB.NET", "vb.net"),
    ("XML", "xml"),
    ("YAML", "yaml"),
];

/// Identifier used when the author picks nothing
pub const FALLBACK: &str = "text";

/// Normalize user input to a language identifier.
///
/// Matches display names and identifiers case-insensitively. Unknown input is
/// kept, lowercased; blank input becomes [`FALLBACK`].
pub fn resolve(input: &str) -> String {
    let input = input.trim();
    if input.is_empty() {
        return FALLBACK.to_string();
    }

    LANGUAGES
        .iter()
        .find(|(name, id)| name.eq_ignore_ascii_case(input) || id.eq_ignore_ascii_case(input))
        .map(|(_, id)| id.to_string())
        .unwrap_or_else(|| input.to_lowercase())
}

/// Display name for an identifier, if it is in the catalog
pub fn display_name(id: &str) -> Option<&'static str> {
    LANGUAGES
        .iter()
        .find(|(_, known)| known.eq_ignore_ascii_case(id))
        .map(|(name, _)| *name)
}
