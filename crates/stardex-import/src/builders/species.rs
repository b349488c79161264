//! Species record builder

use stardex_domain::{FieldValue, Sidebar, Species};

/// Separators seen inside quadrant/planet values, beyond what the
/// normalizer already splits.
const SPECIES_SEPARATORS: [&str; 7] =
    ["<br/>", "<br />", "<br>", "/", " &amp; ", " & ", " and "];

/// The canonical galactic quadrants, short form.
const QUADRANTS: [&str; 4] = ["alpha", "beta", "gamma", "delta"];

pub(super) fn build(title: &str, sidebar: &Sidebar) -> Species {
    Species {
        name: title.to_string(),
        kind: sidebar
            .scalar("Type")
            .map(|value| {
                value
                    .rsplit('|')
                    .next()
                    .unwrap_or(value)
                    .trim()
                    .to_ascii_lowercase()
            })
            .filter(|kind| !kind.is_empty()),
        quadrants: paired_items(sidebar, "Quadrant", "Quadrant2")
            .iter()
            .filter_map(|item| canonical_quadrant(item))
            .collect(),
        planets: paired_items(sidebar, "Planet", "Planet2")
            .iter()
            .map(|item| unwrap_link_anchor(item))
            .filter(|planet| !planet.is_empty())
            .collect(),
        population: sidebar
            .scalar("Population")
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string),
    }
}

/// Collect the primary and secondary variants of a field, split on the
/// species separator set.
fn paired_items(sidebar: &Sidebar, primary: &str, secondary: &str) -> Vec<String> {
    let mut items = Vec::new();
    for name in [primary, secondary] {
        match sidebar.get(name) {
            Some(FieldValue::Scalar(value)) => {
                items.extend(
                    super::split_any(value, &SPECIES_SEPARATORS)
                        .into_iter()
                        .map(|part| part.trim().to_string()),
                );
            }
            Some(FieldValue::List(values)) => {
                for value in values {
                    items.extend(
                        super::split_any(value, &SPECIES_SEPARATORS)
                            .into_iter()
                            .map(|part| part.trim().to_string()),
                    );
                }
            }
            None => {}
        }
    }
    items.retain(|item| !item.is_empty());
    items
}

/// Fold a quadrant value to its canonical short name, discarding anything
/// that is not one of the four.
fn canonical_quadrant(value: &str) -> Option<String> {
    let lower = value.to_ascii_lowercase();
    QUADRANTS
        .iter()
        .find(|quadrant| lower.contains(*quadrant))
        .map(|quadrant| (*quadrant).to_string())
}

/// Unwrap a planet name from link-anchor form: text before a `|`, then
/// before a trailing `#` section anchor.
fn unwrap_link_anchor(value: &str) -> String {
    let before_pipe = value.split('|').next().unwrap_or(value);
    let before_anchor = before_pipe.split('#').next().unwrap_or(before_pipe);
    before_anchor.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use stardex_domain::Category;

    fn sidebar(fields: &[(&str, &str)]) -> Sidebar {
        let mut sidebar = Sidebar::new(Category::Species);
        for (name, value) in fields {
            sidebar.insert(*name, *value);
        }
        sidebar
    }

    #[test]
    fn test_quadrants_folded_and_ordered() {
        let species = build(
            "Vulcan",
            &sidebar(&[("Quadrant", "Alpha Quadrant & Beta Quadrant")]),
        );
        assert_eq!(species.quadrants, vec!["alpha", "beta"]);
    }

    #[test]
    fn test_non_canonical_quadrants_discarded() {
        let species = build(
            "Unknown",
            &sidebar(&[("Quadrant", "Epsilon Quadrant<br/>Delta Quadrant")]),
        );
        assert_eq!(species.quadrants, vec!["delta"]);
    }

    #[test]
    fn test_secondary_quadrant_field_appended() {
        let species = build(
            "Borg",
            &sidebar(&[("Quadrant", "Delta Quadrant"), ("Quadrant2", "Alpha Quadrant")]),
        );
        assert_eq!(species.quadrants, vec!["delta", "alpha"]);
    }

    #[test]
    fn test_planets_unwrapped_from_link_anchor_form() {
        let species = build(
            "Klingon",
            &sidebar(&[("Planet", "Qo'noS|Kronos / Boreth#History")]),
        );
        assert_eq!(species.planets, vec!["Qo'noS", "Boreth"]);
    }

    #[test]
    fn test_type_keeps_last_alternative_lowercased() {
        let species = build("Vulcan", &sidebar(&[("Type", "Humanoid|Vulcanoid")]));
        assert_eq!(species.kind.as_deref(), Some("vulcanoid"));
    }

    #[test]
    fn test_empty_fields_yield_empty_record() {
        let species = build("Mystery", &sidebar(&[]));
        assert!(species.kind.is_none());
        assert!(species.quadrants.is_empty());
        assert!(species.planets.is_empty());
        assert!(species.population.is_none());
    }
}
