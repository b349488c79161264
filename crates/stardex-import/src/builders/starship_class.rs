//! Starship class record builder

use super::{list_field, scalar_field};
use stardex_domain::{Sidebar, StarshipClass};
use stardex_wiki::markup;

/// Class list fields split on line-break tags or comma-space.
const CLASS_SEPARATORS: [&str; 4] = ["<br/>", "<br />", "<br>", ", "];

pub(super) fn build(title: &str, sidebar: &Sidebar) -> StarshipClass {
    StarshipClass {
        name: title.strip_suffix(" class").unwrap_or(title).trim().to_string(),
        owners: list_field(sidebar, "owner", &CLASS_SEPARATORS),
        operators: list_field(sidebar, "operator", &CLASS_SEPARATORS),
        affiliations: list_field(sidebar, "Affiliation", &CLASS_SEPARATORS),
        defenses: list_field(sidebar, "Defenses", &CLASS_SEPARATORS),
        armaments: list_field(sidebar, "Armament", &CLASS_SEPARATORS),
        speeds: list_field(sidebar, "Speed", &CLASS_SEPARATORS),
        crews: list_field(sidebar, "Crew", &CLASS_SEPARATORS),
        active_during: scalar_field(sidebar, "Active"),
        length: scalar_field(sidebar, "Length"),
        mass: scalar_field(sidebar, "Mass"),
        decks: sidebar
            .scalar("Decks")
            .map(|value| markup::strip_comments(value).trim().to_string())
            .filter(|decks| !decks.is_empty()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stardex_domain::Category;

    fn sidebar(fields: &[(&str, &str)]) -> Sidebar {
        let mut sidebar = Sidebar::new(Category::StarshipClass);
        for (name, value) in fields {
            sidebar.insert(*name, *value);
        }
        sidebar
    }

    #[test]
    fn test_name_strips_class_suffix() {
        let class = build("Galaxy class", &sidebar(&[]));
        assert_eq!(class.name, "Galaxy");

        let class = build("D7", &sidebar(&[]));
        assert_eq!(class.name, "D7");
    }

    #[test]
    fn test_lists_split_on_breaks_and_commas() {
        let class = build(
            "Galaxy class",
            &sidebar(&[
                ("Armament", "Phasers, Photon torpedoes<br/>Tractor beam"),
                ("Speed", "Warp 9.6 <small>(12 hours)</small>"),
            ]),
        );
        assert_eq!(
            class.armaments,
            vec!["Phasers", "Photon torpedoes", "Tractor beam"]
        );
        assert_eq!(class.speeds, vec!["Warp 9.6 (12 hours)"]);
    }

    #[test]
    fn test_decks_comments_removed() {
        let class = build(
            "Defiant class",
            &sidebar(&[("Decks", "5 <!-- 4 in some episodes -->")]),
        );
        assert_eq!(class.decks.as_deref(), Some("5"));
    }

    #[test]
    fn test_scalar_fields_cleaned() {
        let class = build(
            "Galaxy class",
            &sidebar(&[
                ("Active", "24th century|2360s onward"),
                ("Length", "642.5 meters|642.5m"),
                ("Mass", "4,500,000 metric tons"),
            ]),
        );
        assert_eq!(class.active_during.as_deref(), Some("2360s onward"));
        assert_eq!(class.length.as_deref(), Some("642.5m"));
        assert_eq!(class.mass.as_deref(), Some("4,500,000 metric tons"));
    }
}
