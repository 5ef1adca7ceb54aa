//! Error types for the backlog pipeline.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;

/// Errors produced while generating a backlog.
///
/// The pipeline stops at the first error; nothing is retried and no partial
/// output is written.
#[derive(Debug, Error)]
pub enum BacklogError {
    /// The input file is missing or unreadable.
    #[error("failed to read {}: {source}", .path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The input is not valid JSON or not an array of records.
    #[error("failed to parse {}: {source}", .path.display())]
    InputParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// A record lacks a required field or has one of the wrong type.
    #[error("malformed issue record at index {index}: {source}")]
    RecordShape {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
    /// The output file could not be written.
    #[error("failed to write {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
}
