//! Wiki-markup stripping helpers
//!
//! Small pure functions shared by the normalizer and the record builders.
//! They deliberately do less than a full wikitext parser: sidebar values
//! are short fragments, and the goal is readable field text, not rendering.

/// Remove the literal `[[` / `]]` link markers and trim.
///
/// The link contents are kept as-is; this is the normalizer's light-touch
/// pass, applied to every field value.
pub fn strip_wiki_links(value: &str) -> String {
    value.replace("[[", "").replace("]]", "").trim().to_string()
}

/// Reduce wiki links to their display text and drop template braces.
///
/// `[[Federation|the Federation]]` becomes `the Federation` (the last `|`
/// alternative wins), quotes and `{{`/`}}` are dropped, and any remaining
/// `|` is assumed to separate link target from text, keeping the last part.
pub fn remove_wiki_links(text: &str) -> String {
    let text = text.replace(['"', '\''], "");
    let text = text.replace("{{", "").replace("}}", "");

    let mut out = String::with_capacity(text.len());
    let mut rest = text.as_str();
    while let Some(start) = rest.find("[[") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("]]") {
            Some(end) => {
                let inner = &after[..end];
                out.push_str(inner.rsplit('|').next().unwrap_or(inner));
                rest = &after[end + 2..];
            }
            None => {
                // Unbalanced opener; keep it verbatim
                out.push_str("[[");
                rest = after;
            }
        }
    }
    out.push_str(rest);

    if out.contains('|') {
        out = out.rsplit('|').next().unwrap_or("").to_string();
    }
    out
}

/// Remove HTML-style tags (`<br/>`, `<small>`, ...) from a fragment.
pub fn strip_tags(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_tag = false;
    for ch in text.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            c if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

/// Remove inline HTML comments (`<!-- ... -->`).
pub fn strip_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find("<!--") {
        out.push_str(&rest[..start]);
        match rest[start + 4..].find("-->") {
            Some(end) => rest = &rest[start + 4 + end + 3..],
            None => {
                rest = "";
                break;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Collapse a disambiguation link (`{{dis|<label>|<other>}}`) to its label.
///
/// Only the first alternative is kept. Values without the wrapper pass
/// through unchanged.
pub fn strip_disambiguation(value: &str) -> String {
    if let Some(start) = value.find("{{dis|") {
        let after = &value[start + "{{dis|".len()..];
        if let Some(end) = after.find("}}") {
            let inner = &after[..end];
            return inner.split('|').next().unwrap_or(inner).trim().to_string();
        }
    }
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_wiki_links() {
        assert_eq!(strip_wiki_links("[[Vulcan]]"), "Vulcan");
        assert_eq!(strip_wiki_links("  [[Alpha Quadrant]]  "), "Alpha Quadrant");
        assert_eq!(strip_wiki_links("plain"), "plain");
        // Pipes are left alone by the light-touch pass
        assert_eq!(strip_wiki_links("[[Vulcan|Vulcans]]"), "Vulcan|Vulcans");
    }

    #[test]
    fn test_remove_wiki_links_keeps_display_text() {
        assert_eq!(
            remove_wiki_links("[[United Federation of Planets|Federation]]"),
            "Federation"
        );
        assert_eq!(remove_wiki_links("[[Starfleet]]"), "Starfleet");
    }

    #[test]
    fn test_remove_wiki_links_drops_quotes_and_braces() {
        assert_eq!(remove_wiki_links("''Galaxy''-class"), "Galaxy-class");
        assert_eq!(remove_wiki_links("{{USS|Enterprise}}"), "Enterprise");
    }

    #[test]
    fn test_remove_wiki_links_bare_pipe_keeps_last() {
        assert_eq!(remove_wiki_links("target|display text"), "display text");
    }

    #[test]
    fn test_strip_tags() {
        assert_eq!(strip_tags("active<br/>destroyed"), "activedestroyed");
        assert_eq!(strip_tags("<small>2370</small>"), "2370");
        assert_eq!(strip_tags("no tags"), "no tags");
    }

    #[test]
    fn test_strip_comments() {
        assert_eq!(strip_comments("15 <!-- unconfirmed -->"), "15 ");
        assert_eq!(strip_comments("a<!--x-->b<!--y-->c"), "abc");
        assert_eq!(strip_comments("unterminated <!-- rest"), "unterminated ");
    }

    #[test]
    fn test_strip_disambiguation() {
        assert_eq!(strip_disambiguation("{{dis|Danube|class}}"), "Danube");
        assert_eq!(strip_disambiguation("no wrapper"), "no wrapper");
        assert_eq!(strip_disambiguation("{{dis|A|B|C}}"), "A");
    }
}
