//! Stardex Dump Streaming
//!
//! Turns a MediaWiki XML dump into a lazy, forward-only sequence of titled
//! page units without materializing the document, and filters out
//! administrative pages by title.
//!
//! ```no_run
//! use stardex_dump::{DumpReader, filter};
//!
//! # fn example() -> Result<(), stardex_dump::DumpError> {
//! for unit in DumpReader::open("enmemoryalpha_pages_current.xml")? {
//!     let unit = unit?;
//!     if filter::is_ignored(&unit.title) {
//!         continue;
//!     }
//!     println!("{}", filter::strip_qualifier(&unit.title));
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod error;
pub mod filter;
mod reader;

pub use error::DumpError;
pub use reader::{is_memory_alpha_dump, read_site_name, DumpReader, RawUnit, SITE_NAME};
