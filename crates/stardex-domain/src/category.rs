//! The closed set of entity categories the pipeline imports

use serde::{Deserialize, Serialize};
use std::fmt;

/// Entity categories recognized by the sidebar extractor.
///
/// The set is closed on purpose: sidebar templates whose tag is not one of
/// these are treated as "no sidebar found" rather than being parsed
/// speculatively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// A television episode page
    Episode,
    /// A species page
    Species,
    /// An individual starship page
    Starship,
    /// A starship class page
    StarshipClass,
}

impl Category {
    /// All categories, in dispatch order.
    pub const ALL: [Category; 4] = [
        Category::Episode,
        Category::Species,
        Category::Starship,
        Category::StarshipClass,
    ];

    /// The tag as it appears in the wiki template invocation
    /// (`{{sidebar <tag> ...}}`).
    pub fn template_tag(&self) -> &'static str {
        match self {
            Category::Episode => "episode",
            Category::Species => "species",
            Category::Starship => "starship",
            Category::StarshipClass => "starship class",
        }
    }

    /// Stable string key used in statistics maps and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Episode => "episode",
            Category::Species => "species",
            Category::Starship => "starship",
            Category::StarshipClass => "starship_class",
        }
    }

    /// Look up a category from its template tag.
    ///
    /// Tags are matched exactly; template tags in the dump are lower-case.
    pub fn from_template_tag(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.template_tag() == tag)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_tag_roundtrip() {
        for category in Category::ALL {
            assert_eq!(
                Category::from_template_tag(category.template_tag()),
                Some(category)
            );
        }
    }

    #[test]
    fn test_unknown_tag() {
        assert_eq!(Category::from_template_tag("planet"), None);
        assert_eq!(Category::from_template_tag(""), None);
        // Matching is exact, not case-insensitive
        assert_eq!(Category::from_template_tag("Episode"), None);
    }

    #[test]
    fn test_stats_keys() {
        assert_eq!(Category::StarshipClass.as_str(), "starship_class");
        assert_eq!(Category::Starship.template_tag(), "starship");
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&Category::StarshipClass).unwrap();
        assert_eq!(json, "\"starship_class\"");
        let parsed: Category = serde_json::from_str("\"episode\"").unwrap();
        assert_eq!(parsed, Category::Episode);
    }
}
