//! Parameters for an alignment run.

use std::path::{Path, PathBuf};

use mesh_transform::RotationAngles;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Directory that receives aligned meshes when no output path is given.
pub const DEFAULT_OUTPUT_DIR: &str = "patched";

/// Suffix appended to the mesh stem for the default output file name.
pub const OUTPUT_SUFFIX: &str = "_moved";

/// Inputs for [`align_mesh`](crate::align_mesh).
///
/// With the `serde` feature this deserializes from the JSON configuration
/// format:
///
/// ```json
/// {
///   "object_to_move": "models/bolt.obj",
///   "destination": "models/socket.obj",
///   "rotation": { "x": 90, "z": 45 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AlignParams {
    /// Mesh that is scaled, rotated and moved.
    pub object_to_move: PathBuf,

    /// Mesh whose bounding box the moved mesh is fitted into.
    pub destination: PathBuf,

    /// Rotation applied after scaling. `None` skips the rotation pass
    /// entirely; `Some` runs it even when every angle is zero.
    pub rotation: Option<RotationAngles>,

    /// Output file. Default: `patched/<stem>_moved.<ext>`.
    pub output: Option<PathBuf>,

    /// Directory for intermediate files. Default: the system temp directory.
    pub work_dir: Option<PathBuf>,
}

impl AlignParams {
    /// Create params that move `object_to_move` into `destination` without rotation.
    #[must_use]
    pub fn new(object_to_move: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            object_to_move: object_to_move.into(),
            destination: destination.into(),
            rotation: None,
            output: None,
            work_dir: None,
        }
    }

    /// Set the rotation applied after scaling.
    #[must_use]
    pub fn with_rotation(mut self, rotation: RotationAngles) -> Self {
        self.rotation = Some(rotation);
        self
    }

    /// Set the output path.
    #[must_use]
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    /// Set the directory for intermediate files.
    #[must_use]
    pub fn with_work_dir(mut self, work_dir: impl Into<PathBuf>) -> Self {
        self.work_dir = Some(work_dir.into());
        self
    }

    /// The output path, falling back to `patched/<stem>_moved.<ext>`.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_align::AlignParams;
    /// use std::path::Path;
    ///
    /// let params = AlignParams::new("models/bolt.obj", "models/socket.obj");
    /// assert_eq!(params.output_path(), Path::new("patched/bolt_moved.obj"));
    /// ```
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        if let Some(output) = &self.output {
            return output.clone();
        }

        let mut name = format!("{}{OUTPUT_SUFFIX}", self.mesh_stem());
        if let Some(ext) = self.object_to_move.extension() {
            name.push('.');
            name.push_str(&ext.to_string_lossy());
        }
        Path::new(DEFAULT_OUTPUT_DIR).join(name)
    }

    /// The directory for intermediate files.
    #[must_use]
    pub fn work_dir(&self) -> PathBuf {
        self.work_dir.clone().unwrap_or_else(std::env::temp_dir)
    }

    /// File stem of the mesh to move, used to name intermediate and output files.
    #[must_use]
    pub fn mesh_stem(&self) -> String {
        self.object_to_move
            .file_stem()
            .map_or_else(|| "mesh".to_string(), |s| s.to_string_lossy().into_owned())
    }
}
