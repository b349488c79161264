//! Title filtering
//!
//! Administrative and meta pages (help, talk, templates, ...) never carry a
//! sidebar worth importing, so they are dropped on title alone before the
//! body is even looked at.

/// Administrative-namespace prefixes whose pages are never imported.
///
/// Closed set; matching is case-sensitive, as namespace prefixes in the
/// dump are.
pub const IGNORED_PREFIXES: [&str; 16] = [
    "Memory Alpha:",
    "Help:",
    "User:",
    "File:",
    "User talk:",
    "Talk:",
    "Memory Alpha talk:",
    "Template:",
    "File talk:",
    "Category:",
    "Category talk:",
    "Forum:",
    "Help talk:",
    "Template talk:",
    "Portal:",
    "Portal talk:",
];

/// Title qualifiers stripped to recover the canonical entity name.
pub const QUALIFIER_SUFFIXES: [&str; 1] = ["(episode)"];

/// Strip known category qualifiers from a title.
///
/// `Caretaker (episode)` becomes `Caretaker`.
pub fn strip_qualifier(title: &str) -> String {
    let mut title = title.to_string();
    for suffix in QUALIFIER_SUFFIXES {
        if title.contains(suffix) {
            title = title.replace(suffix, "");
        }
    }
    title.trim().to_string()
}

/// True if a title belongs to an administrative namespace.
pub fn is_ignored(title: &str) -> bool {
    IGNORED_PREFIXES
        .iter()
        .any(|prefix| title.starts_with(prefix))
}
