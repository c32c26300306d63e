//! Error types for output handling

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by sinks, handlers and the handler factory
#[derive(Debug, Error)]
pub enum OutputError {
    /// The destination file could not be created or opened for writing
    #[error("cannot open {path:?} for writing: {source}")]
    ResourceUnavailable {
        /// The destination that was requested
        path: PathBuf,
        /// The underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// A charset name does not map to a supported encoding
    #[error("unknown encoding: {0}")]
    UnknownEncoding(String),

    /// A write to an open sink failed
    #[error("write failed: {0}")]
    Write(#[from] io::Error),

    /// The sink was already released by run termination
    #[error("output sink is closed")]
    Closed,

    /// Invalid output configuration
    #[error("configuration error: {0}")]
    Config(String),
}

impl OutputError {
    /// Whether this error happened while writing to an already open sink
    pub fn is_write_failure(&self) -> bool {
        matches!(self, OutputError::Write(_) | OutputError::Closed)
    }
}

/// Result type for output operations
pub type Result<T> = std::result::Result<T, OutputError>;
