//! Stardex Storage
//!
//! Infrastructure implementations of the domain's storage seams: an
//! in-memory `RecordStore` and the seeded series catalogue used for
//! episode resolution.

#![warn(missing_docs)]

mod catalog;
mod error;
mod memory;

pub use catalog::SeriesCatalog;
pub use error::StoreError;
pub use memory::MemoryStore;
