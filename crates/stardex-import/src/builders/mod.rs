//! Category record builders
//!
//! One builder per category, each a pure function from
//! `(title, sidebar, context)` to a finished record. Builders never touch
//! storage; the orchestrator decides what to persist.

use crate::{BuildError, NumberPolicy};
use stardex_domain::{FieldValue, Record, SeriesLookup, Sidebar};
use stardex_wiki::markup;

mod episode;
mod species;
mod starship;
mod starship_class;

/// Line-break tag spellings that appear in sidebar list fields.
pub(crate) const BREAK_TAGS: [&str; 3] = ["<br/>", "<br />", "<br>"];

/// Dispatch a normalized sidebar to its category's builder.
pub fn build<L>(
    title: &str,
    sidebar: &Sidebar,
    lookup: &L,
    policy: NumberPolicy,
) -> Result<Record, BuildError>
where
    L: SeriesLookup + ?Sized,
{
    match sidebar.category {
        stardex_domain::Category::Episode => {
            episode::build(title, sidebar, lookup, policy).map(Record::Episode)
        }
        stardex_domain::Category::Species => {
            Ok(Record::Species(species::build(title, sidebar)))
        }
        stardex_domain::Category::Starship => {
            Ok(Record::Starship(starship::build(title, sidebar)))
        }
        stardex_domain::Category::StarshipClass => {
            Ok(Record::StarshipClass(starship_class::build(title, sidebar)))
        }
    }
}

/// Split on the earliest occurrence of any separator, repeatedly.
pub(crate) fn split_any<'a>(value: &'a str, separators: &[&str]) -> Vec<&'a str> {
    let mut parts = Vec::new();
    let mut rest = value;
    loop {
        let hit = separators
            .iter()
            .filter_map(|sep| rest.find(sep).map(|pos| (pos, sep.len())))
            .min();
        match hit {
            Some((pos, len)) => {
                parts.push(&rest[..pos]);
                rest = &rest[pos + len..];
            }
            None => {
                parts.push(rest);
                return parts;
            }
        }
    }
}

/// Tag-strip, link-strip, and trim one list element.
pub(crate) fn clean_element(element: &str) -> String {
    markup::remove_wiki_links(&markup::strip_tags(element))
        .trim()
        .to_string()
}

/// Build a cleaned list from a sidebar field, splitting scalar values on
/// the given separators. List values (already split by the normalizer) go
/// through the same per-element cleanup.
pub(crate) fn list_field(sidebar: &Sidebar, name: &str, separators: &[&str]) -> Vec<String> {
    let mut items = Vec::new();
    match sidebar.get(name) {
        Some(FieldValue::Scalar(value)) => {
            items.extend(split_any(value, separators).into_iter().map(clean_element));
        }
        Some(FieldValue::List(values)) => {
            for value in values {
                items.extend(split_any(value, separators).into_iter().map(clean_element));
            }
        }
        None => {}
    }
    items.retain(|item| !item.is_empty());
    items
}

/// A sidebar field as a cleaned, non-empty scalar.
pub(crate) fn scalar_field(sidebar: &Sidebar, name: &str) -> Option<String> {
    sidebar
        .scalar(name)
        .map(clean_element)
        .filter(|value| !value.is_empty())
}
