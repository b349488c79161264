//! Error types for dump streaming

use thiserror::Error;

/// Errors raised while streaming the dump.
///
/// Both variants are fatal for an import run: an unreadable or malformed
/// source leaves no safe way to continue.
#[derive(Error, Debug)]
pub enum DumpError {
    /// Underlying source unreadable
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed XML in the dump
    #[error("XML parse error: {0}")]
    Xml(String),
}

impl From<quick_xml::Error> for DumpError {
    fn from(e: quick_xml::Error) -> Self {
        match e {
            quick_xml::Error::Io(io) => {
                DumpError::Io(std::io::Error::new(io.kind(), io.to_string()))
            }
            other => DumpError::Xml(other.to_string()),
        }
    }
}
