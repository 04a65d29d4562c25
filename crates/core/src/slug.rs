//! URL slug derivation shared by events, articles, and merch categories.

use std::sync::OnceLock;

use regex::Regex;

fn non_word() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^\w-]+").expect("static regex"))
}

fn hyphen_runs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"-+").expect("static regex"))
}

/// Normalize a title or user-supplied slug into its canonical slug form:
/// trim, spaces to hyphens, strip everything but word characters and
/// hyphens, collapse hyphen runs, lowercase.
///
/// Idempotent: re-running on an already-valid slug is a no-op. Uniqueness
/// within a collection is enforced by the database unique index, not here.
pub fn format_slug(value: &str) -> String {
    let spaced = value.trim().replace(' ', "-");
    let stripped = non_word().replace_all(&spaced, "");
    let collapsed = hyphen_runs().replace_all(&stripped, "-");
    collapsed.trim_matches('-').to_lowercase()
}

/// Resolve the slug for a write: an explicit slug is re-normalized, an
/// absent/empty one is derived from the title.
pub fn resolve_slug(title: &str, slug: Option<&str>) -> String {
    match slug {
        Some(s) if !s.trim().is_empty() => format_slug(s),
        _ => format_slug(title),
    }
}
