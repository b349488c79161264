//! Trait definitions for external collaborators
//!
//! These traits mark the boundary between the pipeline and infrastructure.
//! Implementations live in other crates (stardex-store).

use crate::{Record, RecordId, SeriesId};

/// Storage collaborator for finished records.
///
/// `persist` must never fail silently: an error here is fatal for the run,
/// since a partial import with no recovery point is unacceptable.
pub trait RecordStore {
    /// Error type for store operations
    type Error;

    /// Persist a finished record and assign its identity.
    fn persist(&mut self, record: Record) -> Result<RecordId, Self::Error>;
}

/// Read-only series-abbreviation lookup, fully populated before a run.
pub trait SeriesLookup {
    /// Resolve a series abbreviation (e.g. `VOY`) to its catalogue id.
    fn lookup(&self, abbreviation: &str) -> Option<SeriesId>;
}
