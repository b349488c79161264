//! Finished domain records handed to storage

use crate::{Category, SeriesId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier assigned by the store when a record is persisted.
///
/// UUIDv7-based: chronologically sortable and needs no coordination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordId(u128);

impl RecordId {
    /// Generate a new UUIDv7-based RecordId.
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Create a RecordId from a raw u128 value.
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Get the raw u128 value.
    pub fn value(&self) -> u128 {
        self.0
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

/// A television episode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    /// Page title with the `(episode)` qualifier stripped
    pub title: String,
    /// Resolved series this episode belongs to
    pub series_id: SeriesId,
    /// Season number (0 when the source value was not numeric and the
    /// coerce policy is in effect)
    pub season_num: i32,
    /// Episode number within the season
    pub episode_num: i32,
    /// Production serial number, when present
    pub serial_number: Option<String>,
    /// First air date as `YYYY-MM-DD`, when derivable
    pub air_date: Option<String>,
}

/// A species.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Species {
    /// Species name (the page title)
    pub name: String,
    /// Species type, lower-cased (e.g. `humanoid`)
    pub kind: Option<String>,
    /// Galactic quadrants of origin, folded to the canonical short names
    /// (`alpha`, `beta`, `gamma`, `delta`)
    pub quadrants: Vec<String>,
    /// Home planets, unwrapped from link-anchor form
    pub planets: Vec<String>,
    /// Population figure, verbatim from the sidebar
    pub population: Option<String>,
}

/// An individual starship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Starship {
    /// Ship name; derived from the title when the sidebar has no name field
    pub name: String,
    /// Ship class
    pub class: Option<String>,
    /// Registry number (e.g. `NCC-1701`)
    pub registry_number: Option<String>,
    /// Owners over time
    pub owners: Vec<String>,
    /// Operators over time
    pub operators: Vec<String>,
    /// Status entries (a ship can have several, e.g. destroyed then rebuilt)
    pub status: Vec<String>,
    /// Date of the last status change, when present
    pub status_at: Option<String>,
}

/// A starship class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarshipClass {
    /// Class name with the trailing ` class` suffix stripped
    pub name: String,
    /// Owners
    pub owners: Vec<String>,
    /// Operators
    pub operators: Vec<String>,
    /// Political affiliations
    pub affiliations: Vec<String>,
    /// Defensive systems
    pub defenses: Vec<String>,
    /// Armament
    pub armaments: Vec<String>,
    /// Speed figures
    pub speeds: Vec<String>,
    /// Crew complement figures
    pub crews: Vec<String>,
    /// Period the class was active
    pub active_during: Option<String>,
    /// Hull length
    pub length: Option<String>,
    /// Mass
    pub mass: Option<String>,
    /// Number of decks, with inline comments removed
    pub decks: Option<String>,
}

/// A finished domain record of any category.
///
/// Built once per valid unit; never mutated; ownership passes to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Record {
    /// An episode record
    Episode(Episode),
    /// A species record
    Species(Species),
    /// A starship record
    Starship(Starship),
    /// A starship class record
    StarshipClass(StarshipClass),
}

impl Record {
    /// The category this record belongs to.
    pub fn category(&self) -> Category {
        match self {
            Record::Episode(_) => Category::Episode,
            Record::Species(_) => Category::Species,
            Record::Starship(_) => Category::Starship,
            Record::StarshipClass(_) => Category::StarshipClass,
        }
    }

    /// The record's identifying name or title.
    pub fn name(&self) -> &str {
        match self {
            Record::Episode(e) => &e.title,
            Record::Species(s) => &s.name,
            Record::Starship(s) => &s.name,
            Record::StarshipClass(c) => &c.name,
        }
    }
}
