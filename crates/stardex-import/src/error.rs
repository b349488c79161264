//! Error types for record building and the import run

use stardex_dump::DumpError;
use thiserror::Error;

/// Per-unit builder failures.
///
/// All of these are non-fatal at the orchestrator level: the unit is
/// logged and skipped, and the run continues.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BuildError {
    /// The episode's series abbreviation is not in the catalogue
    #[error("unknown series abbreviation `{0}`")]
    UnknownSeries(String),

    /// A field the builder cannot do without is absent or empty
    #[error("required field `{0}` is missing")]
    MissingField(&'static str),

    /// A numeric field did not parse and the skip policy is in effect
    #[error("field `{field}` is not a number: `{value}`")]
    InvalidNumber {
        /// Sidebar field name
        field: &'static str,
        /// The offending value
        value: String,
    },
}

/// Fatal errors an import run can return.
///
/// Everything else (missing sidebars, builder rejections) is absorbed at
/// unit granularity; only a failing source stream or a failing store
/// aborts the run.
#[derive(Error, Debug)]
pub enum ImportError {
    /// The dump stream failed mid-run
    #[error("dump stream failed: {0}")]
    Stream(#[from] DumpError),

    /// The record store rejected a persist call
    #[error("record store failed: {0}")]
    Storage(String),
}
