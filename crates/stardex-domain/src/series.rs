//! Series reference data
//!
//! Episodes can only be resolved against a pre-existing series catalogue;
//! the dump gives no ordering guarantee between series and episode pages,
//! so the catalogue is populated before a run starts and is immutable
//! during it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a known series in the catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SeriesId(u32);

impl SeriesId {
    /// Create a SeriesId from a raw value.
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for SeriesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An entry in the series catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesRef {
    /// Catalogue identifier
    pub id: SeriesId,
    /// Abbreviation used in episode sidebars (e.g. `TNG`)
    pub abbreviation: String,
    /// Full series name
    pub name: String,
}

impl SeriesRef {
    /// Create a new series reference.
    pub fn new(id: SeriesId, abbreviation: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            abbreviation: abbreviation.into(),
            name: name.into(),
        }
    }
}
