//! Error types for sidebar parsing

use thiserror::Error;

/// Errors raised while locating the sidebar template in a page body.
///
/// Both are per-unit and non-fatal. `NotFound` is the expected majority
/// outcome (most pages carry no sidebar) and must stay distinguishable from
/// the structural `Unterminated` case.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SidebarError {
    /// No recognized sidebar template in the page body
    #[error("no sidebar template found")]
    NotFound,

    /// A sidebar template opened but its closing marker never appeared
    #[error("sidebar template is never closed")]
    Unterminated,
}
