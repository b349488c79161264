//! Starship record builder

use super::{list_field, scalar_field, BREAK_TAGS};
use stardex_domain::{Sidebar, Starship};

pub(super) fn build(title: &str, sidebar: &Sidebar) -> Starship {
    let registry_number = scalar_field(sidebar, "Registry");

    let name = scalar_field(sidebar, "name")
        .unwrap_or_else(|| derive_name(title, registry_number.as_deref()));

    Starship {
        name,
        class: scalar_field(sidebar, "Class"),
        registry_number,
        owners: list_field(sidebar, "owner", &BREAK_TAGS),
        operators: list_field(sidebar, "operator", &BREAK_TAGS),
        status: list_field(sidebar, "Status", &BREAK_TAGS),
        status_at: scalar_field(sidebar, "Datestatus"),
    }
}

/// Without an explicit name field the title is the name, minus the
/// registry parenthetical when the registry is known.
fn derive_name(title: &str, registry: Option<&str>) -> String {
    match registry {
        Some(registry) => title.replace(&format!("({registry})"), "").trim().to_string(),
        None => title.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stardex_domain::Category;

    fn sidebar(fields: &[(&str, &str)]) -> Sidebar {
        let mut sidebar = Sidebar::new(Category::Starship);
        for (name, value) in fields {
            sidebar.insert(*name, *value);
        }
        sidebar
    }

    #[test]
    fn test_name_derived_from_title_and_registry() {
        let ship = build(
            "USS Enterprise (NCC-1701)",
            &sidebar(&[("Registry", "NCC-1701"), ("Class", "Constitution class|Constitution")]),
        );
        assert_eq!(ship.name, "USS Enterprise");
        assert_eq!(ship.registry_number.as_deref(), Some("NCC-1701"));
        assert_eq!(ship.class.as_deref(), Some("Constitution"));
    }

    #[test]
    fn test_explicit_name_field_wins() {
        let ship = build(
            "USS Defiant (NX-74205)",
            &sidebar(&[("name", "USS Defiant"), ("Registry", "NX-74205")]),
        );
        assert_eq!(ship.name, "USS Defiant");
    }

    #[test]
    fn test_title_kept_when_no_registry() {
        let ship = build("Phoenix", &sidebar(&[]));
        assert_eq!(ship.name, "Phoenix");
    }

    #[test]
    fn test_status_list_split_and_cleaned() {
        let ship = build(
            "USS Voyager (NCC-74656)",
            &sidebar(&[
                ("Registry", "NCC-74656"),
                ("Status", "Active <small>2378</small><br/>Returned to Earth"),
                ("Datestatus", "2378"),
            ]),
        );
        assert_eq!(ship.status, vec!["Active 2378", "Returned to Earth"]);
        assert_eq!(ship.status_at.as_deref(), Some("2378"));
    }

    #[test]
    fn test_owner_and_operator_lists() {
        let ship = build(
            "USS Enterprise (NCC-1701-D)",
            &sidebar(&[
                ("Registry", "NCC-1701-D"),
                ("owner", "United Federation of Planets|Federation"),
                ("operator", "Starfleet<br />Klingon Empire"),
            ]),
        );
        assert_eq!(ship.owners, vec!["Federation"]);
        assert_eq!(ship.operators, vec!["Starfleet", "Klingon Empire"]);
    }
}
