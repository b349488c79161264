//! Stardex Wiki Parsing
//!
//! Finds the sidebar template embedded in a page's wikitext and normalizes
//! it into a typed field map. This crate is pure text processing: no I/O,
//! no storage, no async.
//!
//! ```
//! use stardex_wiki::sidebar;
//! use stardex_domain::Category;
//!
//! let text = "{{sidebar episode|\n|sSeries = [[VOY]]\n|nSeason = 1\n}}";
//! let parsed = sidebar::parse(text).unwrap();
//! assert_eq!(parsed.category, Category::Episode);
//! assert_eq!(parsed.scalar("sSeries"), Some("VOY"));
//! ```

#![warn(missing_docs)]

mod error;
pub mod fields;
pub mod markup;
pub mod sidebar;

pub use error::SidebarError;
pub use sidebar::{extract, parse, RawSidebar};
