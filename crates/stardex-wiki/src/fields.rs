//! Field normalization
//!
//! Turns the raw text captured from a sidebar template into an ordered
//! field map. Parsing is line-oriented because `|` doubles as both the
//! field separator and a value character; every line carrying a first `=`
//! yields one field, everything else is dropped.
//!
//! Cleanup rules run per field, in order: compact-date expansion,
//! multi-value splitting for `ws`-prefixed names, wiki-link stripping, and
//! a species-only disambiguation collapse. A secondary pass reassembles
//! the serial air date from its component fields when the composite is
//! absent or malformed.

use crate::markup;
use stardex_domain::{Category, FieldValue, Sidebar};
use tracing::debug;

/// Field name whose value is the composite air date.
pub const AIR_DATE_FIELD: &str = "nSerialAirdate";

/// Naming schemes for the air-date part fields, in priority order.
/// When both schemes are complete the later one wins.
const AIR_DATE_SCHEMES: [&str; 2] = ["Release", "Airdate"];

/// Separators recognized inside a multi-valued (`ws`-prefixed) field.
const MULTI_SEPARATORS: [&str; 3] = [" &amp; ", " & ", " and "];

/// Parse raw sidebar field text into a normalized field map.
pub fn normalize(category: Category, raw: &str) -> Sidebar {
    let mut sidebar = Sidebar::new(category);

    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let Some((name, value)) = line.split_once('=') else {
            continue;
        };
        let name = name.trim().trim_start_matches('|').trim();
        let value = value.trim();
        if name.is_empty() {
            continue;
        }
        sidebar.insert(name.to_string(), clean_value(category, name, value));
    }

    reassemble_air_date(&mut sidebar);
    sidebar
}

fn clean_value(category: Category, name: &str, value: &str) -> FieldValue {
    if is_compact_date(name, value) {
        return FieldValue::Scalar(expand_compact_date(value));
    }

    if name.starts_with("ws") && !value.is_empty() {
        let parts = split_multi(value)
            .into_iter()
            .map(|p| markup::strip_wiki_links(p))
            .filter(|p| !p.is_empty())
            .collect();
        return FieldValue::List(parts);
    }

    let mut scalar = markup::strip_wiki_links(value);
    if category == Category::Species {
        scalar = markup::strip_disambiguation(&scalar);
    }
    FieldValue::Scalar(scalar)
}

/// A date-like name (`date` somewhere past the first character) whose
/// value is a bare `YYYYMMDD`.
fn is_compact_date(name: &str, value: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    matches!(lower.find("date"), Some(pos) if pos > 0)
        && value.len() == 8
        && value.bytes().all(|b| b.is_ascii_digit())
}

fn expand_compact_date(value: &str) -> String {
    format!("{}-{}-{}", &value[..4], &value[4..6], &value[6..8])
}

/// Split on the first-occurring multi-value separator, repeatedly.
fn split_multi(value: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut rest = value;
    loop {
        let hit = MULTI_SEPARATORS
            .iter()
            .filter_map(|sep| rest.find(sep).map(|pos| (pos, sep.len())))
            .min();
        match hit {
            Some((pos, len)) => {
                parts.push(rest[..pos].trim());
                rest = &rest[pos + len..];
            }
            None => {
                parts.push(rest.trim());
                return parts;
            }
        }
    }
}

/// Rebuild `nSerialAirdate` from its month/day/year parts when the
/// composite field is present but not a full `YYYY-MM-DD`.
///
/// Both naming schemes are tried in order and a later complete scheme
/// overwrites an earlier one. Missing or unparseable parts leave the
/// field as it was.
fn reassemble_air_date(sidebar: &mut Sidebar) {
    let needs_rebuild = match sidebar.scalar(AIR_DATE_FIELD) {
        Some(value) => value.len() != 10,
        None => return,
    };
    if !needs_rebuild {
        return;
    }

    let mut rebuilt = None;
    for scheme in AIR_DATE_SCHEMES {
        let month = sidebar
            .scalar(&format!("s{scheme}Month"))
            .and_then(month_number);
        let day = sidebar
            .scalar(&format!("n{scheme}Day"))
            .and_then(|v| v.trim().parse::<u32>().ok());
        let year = sidebar
            .scalar(&format!("n{scheme}Year"))
            .and_then(|v| v.trim().parse::<u32>().ok());
        if let (Some(month), Some(day), Some(year)) = (month, day, year) {
            rebuilt = Some(format!("{year:04}-{month:02}-{day:02}"));
        }
    }

    match rebuilt {
        Some(date) => sidebar.insert(AIR_DATE_FIELD.to_string(), FieldValue::Scalar(date)),
        None => debug!("air date parts missing or unparseable, composite left as-is"),
    }
}

/// English month name (full or three-letter) to its 1-based number.
fn month_number(name: &str) -> Option<u32> {
    const MONTHS: [&str; 12] = [
        "january",
        "february",
        "march",
        "april",
        "may",
        "june",
        "july",
        "august",
        "september",
        "october",
        "november",
        "december",
    ];
    let lower = name.trim().to_ascii_lowercase();
    MONTHS.iter().position(|m| {
        *m == lower || (lower.len() == 3 && m.starts_with(lower.as_str()))
    }).map(|i| i as u32 + 1)
}
