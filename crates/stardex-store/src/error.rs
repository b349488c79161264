//! Error types for storage operations

use thiserror::Error;

/// Errors raised while persisting records.
///
/// Any of these is fatal for the run: a partial import with no recovery
/// point must not be reported as a completed one.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    /// The store refused the record because its configured capacity limit
    /// was reached
    #[error("store capacity of {limit} records exceeded")]
    CapacityExceeded {
        /// The configured limit
        limit: usize,
    },
}
