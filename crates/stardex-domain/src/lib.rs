//! Stardex Domain Layer
//!
//! Core value types and trait interfaces for the Memory Alpha import
//! pipeline. This crate carries no parsing or I/O logic; it defines the
//! concepts the other layers exchange:
//!
//! - **Category**: the closed set of entity kinds the pipeline understands
//! - **Sidebar**: the typed result of parsing a page's sidebar template
//! - **Domain records**: Episode, Species, Starship, StarshipClass
//! - **ImportStats**: per-category counters accumulated over a run
//! - **Trait seams**: `RecordStore` and `SeriesLookup`, implemented by the
//!   infrastructure layer (stardex-store)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod category;
pub mod field;
pub mod record;
pub mod series;
pub mod stats;
pub mod traits;

// Re-exports for convenience
pub use category::Category;
pub use field::{FieldValue, Sidebar};
pub use record::{Episode, Record, RecordId, Species, Starship, StarshipClass};
pub use series::{SeriesId, SeriesRef};
pub use stats::ImportStats;
pub use traits::{RecordStore, SeriesLookup};
