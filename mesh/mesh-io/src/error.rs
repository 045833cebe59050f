//! Error types for mesh I/O operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for mesh I/O operations.
pub type IoResult<T> = Result<T, IoError>;

/// Errors that can occur while scanning or rewriting a mesh file.
#[derive(Debug, Error)]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
        /// The error reported by the operating system.
        #[source]
        source: std::io::Error,
    },

    /// A vertex record did not decode to exactly three finite numbers.
    #[error("unreadable vertex record on line {line}: {content:?}")]
    UnreadableRecord {
        /// 1-based line number of the record.
        line: usize,
        /// The offending line, lossily decoded and without its terminator.
        content: String,
    },

    /// The mesh has no vertex records, so it has no bounds.
    #[error("mesh has no vertex records")]
    NoVertices,

    /// Writing the rewritten mesh failed.
    #[error("write error: {0}")]
    Write(#[source] std::io::Error),

    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IoError {
    /// Create an `UnreadableRecord` error for a raw line.
    #[must_use]
    pub fn unreadable(line: usize, raw: &[u8]) -> Self {
        Self::UnreadableRecord {
            line,
            content: String::from_utf8_lossy(raw).trim_end().to_string(),
        }
    }
}
