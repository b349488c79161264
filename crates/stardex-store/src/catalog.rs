//! Seeded series catalogue

use stardex_domain::{SeriesId, SeriesLookup, SeriesRef};

/// The series known to Memory Alpha's episode sidebars, as seeded by the
/// reference data. Ids are stable across runs.
const SEED: [(u32, &str, &str); 7] = [
    (1, "TOS", "Star Trek: The Original Series"),
    (2, "TAS", "Star Trek: The Animated Series"),
    (3, "TNG", "Star Trek: The Next Generation"),
    (4, "DS9", "Star Trek: Deep Space Nine"),
    (5, "VOY", "Star Trek: Voyager"),
    (6, "ENT", "Star Trek: Enterprise"),
    (7, "DIS", "Star Trek: Discovery"),
];

/// Read-only series catalogue, fully populated before a run starts.
#[derive(Debug, Clone)]
pub struct SeriesCatalog {
    entries: Vec<SeriesRef>,
}

impl SeriesCatalog {
    /// Build a catalogue from explicit entries.
    pub fn new(entries: Vec<SeriesRef>) -> Self {
        Self { entries }
    }

    /// The catalogue seeded with the known Memory Alpha series.
    pub fn seeded() -> Self {
        let entries = SEED
            .iter()
            .map(|(id, abbr, name)| SeriesRef::new(SeriesId::new(*id), *abbr, *name))
            .collect();
        Self { entries }
    }

    /// Iterate over the catalogue entries.
    pub fn iter(&self) -> impl Iterator<Item = &SeriesRef> {
        self.entries.iter()
    }

    /// Number of known series.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the catalogue holds no series.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SeriesCatalog {
    fn default() -> Self {
        Self::seeded()
    }
}

impl SeriesLookup for SeriesCatalog {
    fn lookup(&self, abbreviation: &str) -> Option<SeriesId> {
        self.entries
            .iter()
            .find(|series| series.abbreviation == abbreviation)
            .map(|series| series.id)
    }
}
