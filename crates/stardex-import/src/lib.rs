//! Stardex Import Pipeline
//!
//! The orchestration layer: category record builders, the import
//! configuration, the sequential orchestrator, and an async worker
//! wrapper for running imports in the background.
//!
//! ```no_run
//! use stardex_import::{ImportConfig, Importer};
//! use stardex_store::{MemoryStore, SeriesCatalog};
//! use stardex_dump::DumpReader;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut importer = Importer::new(MemoryStore::new(), SeriesCatalog::seeded());
//! let reader = DumpReader::open("enmemoryalpha_pages_current.xml")?;
//! let stats = importer.run(reader)?;
//! println!("{}", stats.summary());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod builders;
mod config;
mod error;
mod importer;
mod worker;

pub use config::{ImportConfig, NumberPolicy};
pub use error::{BuildError, ImportError};
pub use importer::{CancelHandle, Importer};
pub use worker::ImportWorker;
