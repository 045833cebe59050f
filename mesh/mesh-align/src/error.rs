//! Error types for mesh alignment.

use std::path::{Path, PathBuf};

use mesh_io::IoError;
use mesh_types::{Axis, Vector3};
use thiserror::Error;

/// Result type for alignment operations.
pub type AlignResult<T> = Result<T, AlignError>;

/// Errors that can abort an alignment run.
///
/// Every variant is fatal. The pipeline stops at the first error and never
/// writes the output file.
#[derive(Debug, Error)]
pub enum AlignError {
    /// A mesh has no vertex records, so its bounds are undefined.
    #[error("malformed mesh {mesh}: no vertex records")]
    MalformedMesh {
        /// The mesh path, or a description of the bounds that were empty.
        mesh: String,
    },

    /// The mesh to move has zero size along an axis, so no scale factor exists.
    #[error(
        "degenerate geometry: object to move has zero size along {axis} (size {} x {} x {})",
        .size.x,
        .size.y,
        .size.z
    )]
    DegenerateGeometry {
        /// The first flat axis.
        axis: Axis,
        /// Size of the mesh's bounding box along each axis.
        size: Vector3<f64>,
    },

    /// A vertex record did not decode to exactly three numbers.
    #[error("unreadable vertex record in {path} on line {line}: {content:?}")]
    UnreadableRecord {
        /// File containing the record.
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        /// The offending line.
        content: String,
    },

    /// Reading, writing, creating or renaming a file failed.
    #[error("I/O failure on {path}: {source}")]
    Io {
        /// The file or directory involved.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },
}

impl AlignError {
    /// Attach `path` to an I/O error.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Translate a stream error raised while processing `path`.
    #[must_use]
    pub fn from_stream(path: &Path, err: IoError) -> Self {
        match err {
            IoError::FileNotFound { path, source } => Self::io(path, source),
            IoError::UnreadableRecord { line, content } => Self::UnreadableRecord {
                path: path.to_path_buf(),
                line,
                content,
            },
            IoError::NoVertices => Self::MalformedMesh {
                mesh: path.display().to_string(),
            },
            IoError::Write(source) | IoError::Io(source) => Self::io(path, source),
        }
    }

    /// Translate an error from rewriting `input` into `output`.
    ///
    /// Write failures are attributed to `output`, everything else to `input`.
    #[must_use]
    pub fn from_rewrite(input: &Path, output: &Path, err: IoError) -> Self {
        match err {
            IoError::Write(source) => Self::io(output, source),
            other => Self::from_stream(input, other),
        }
    }
}
