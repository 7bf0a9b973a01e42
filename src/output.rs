use std::sync::OnceLock;

static QUIET: OnceLock<bool> = OnceLock::new();

/// `CODEKIT_QUIET=1` suppresses banners and decorations in human output
pub fn is_quiet() -> bool {
    *QUIET.get_or_init(|| {
        std::env::var("CODEKIT_QUIET")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    })
}
