//! Sidebar template extraction
//!
//! Finds the `{{sidebar <category> ...}}` invocation embedded in a page
//! body and captures its raw field text. The scan tracks brace depth
//! explicitly instead of using a regex: nested templates inside field
//! values (`{{dis|..}}`, `{{USS|..}}`) must not close the sidebar early,
//! and adversarial nesting must not blow up.

use crate::error::SidebarError;
use crate::fields;
use stardex_domain::{Category, Sidebar};
use tracing::debug;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";
const KEYWORD: &str = "sidebar";

/// Category tags in match order: longest first, so `starship class` is
/// never mistaken for `starship`.
const TAGS: [(Category, &str); 4] = [
    (Category::StarshipClass, "starship class"),
    (Category::Starship, "starship"),
    (Category::Episode, "episode"),
    (Category::Species, "species"),
];

/// An extracted-but-unnormalized sidebar: category tag plus the raw text
/// between the template markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSidebar<'a> {
    /// Which category template matched
    pub category: Category,
    /// Text between the category tag and the closing marker
    pub raw_fields: &'a str,
}

/// Locate the first recognized sidebar template in a page body.
///
/// The `sidebar` keyword is matched case-insensitively; the category tag
/// must be one of the closed set, so unrelated `{{sidebar ...}}` templates
/// are passed over and the scan continues.
pub fn extract(text: &str) -> Result<RawSidebar<'_>, SidebarError> {
    let mut pos = 0;
    while let Some(offset) = text[pos..].find(OPEN) {
        let start = pos + offset;
        let after = &text[start + OPEN.len()..];

        if let Some((category, header_len)) = match_header(after) {
            let body_start = start + OPEN.len() + header_len;
            return match find_matching_close(text, body_start) {
                Some(close) => Ok(RawSidebar {
                    category,
                    raw_fields: trim_closing(&text[body_start..close]),
                }),
                None => {
                    debug!(category = %category, "sidebar template opened but never closed");
                    Err(SidebarError::Unterminated)
                }
            };
        }

        pos = start + OPEN.len();
    }
    Err(SidebarError::NotFound)
}

/// Extract and normalize in one step.
pub fn parse(text: &str) -> Result<Sidebar, SidebarError> {
    let raw = extract(text)?;
    Ok(fields::normalize(raw.category, raw.raw_fields))
}

/// Match `sidebar <tag>` at the start of `after`, returning the category
/// and the number of bytes consumed.
fn match_header(after: &str) -> Option<(Category, usize)> {
    // Compare bytes: slicing at KEYWORD.len() is only safe once the
    // prefix is known to be ASCII, and page text is arbitrary UTF-8
    let bytes = after.as_bytes();
    if bytes.len() < KEYWORD.len()
        || !bytes[..KEYWORD.len()].eq_ignore_ascii_case(KEYWORD.as_bytes())
    {
        return None;
    }
    let rest = &after[KEYWORD.len()..];
    let trimmed = rest.trim_start_matches([' ', '\t']);
    let ws_len = rest.len() - trimmed.len();
    if ws_len == 0 {
        return None;
    }

    for (category, tag) in TAGS {
        if let Some(following) = trimmed.strip_prefix(tag) {
            // The tag must end at a delimiter, not inside a longer word
            let boundary = match following.chars().next() {
                None => true,
                Some(c) => c == '|' || c == '}' || c.is_whitespace(),
            };
            if boundary {
                return Some((category, KEYWORD.len() + ws_len + tag.len()));
            }
        }
    }
    None
}

/// Find the `}}` that closes the template opened just before `from`,
/// accounting for nested `{{ ... }}` pairs.
fn find_matching_close(text: &str, from: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut i = from;
    while i < text.len() {
        let rest = &text[i..];
        if rest.starts_with(OPEN) {
            depth += 1;
            i += OPEN.len();
        } else if rest.starts_with(CLOSE) {
            if depth == 0 {
                return Some(i);
            }
            depth -= 1;
            i += CLOSE.len();
        } else {
            i += rest.chars().next().map_or(1, char::len_utf8);
        }
    }
    None
}

/// Drop the trailing newline and the optional trailing `|` that precede
/// the closing marker in well-formed sidebars.
fn trim_closing(raw: &str) -> &str {
    let trimmed = raw.trim_end();
    trimmed
        .strip_suffix('|')
        .map(str::trim_end)
        .unwrap_or(trimmed)
}
