//! Assembler error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a graph build
///
/// Any of these invalidates the whole run; no partial document is written.
#[derive(Error, Debug)]
pub enum AssemblerError {
    /// Input record without a usable name
    #[error("Record {index} has no name")]
    MissingName {
        /// Position of the record in the input array
        index: usize,
    },

    /// Two records derive the same node id
    #[error("Node id '{id}' is shared by '{first}' and '{second}'")]
    DuplicateId {
        /// Colliding id
        id: String,
        /// Name of the earlier record
        first: String,
        /// Name of the later record
        second: String,
    },

    /// Input document is not a JSON array of records
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// File system error
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// Path being read or written
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
