//! Scoped files for intermediate and final pipeline stages.

use std::io::BufWriter;
use std::path::Path;

use mesh_io::{RewriteStats, open_mesh, rewrite_vertices};
use mesh_transform::VertexMap;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{AlignError, AlignResult};

/// A mesh file owned by one pipeline stage.
///
/// Backed by a uniquely named temporary file that is deleted when the value
/// is dropped, on success and error paths alike. Only [`persist`](Self::persist)
/// keeps the file, by renaming it into place.
#[derive(Debug)]
pub(crate) struct StagedMesh {
    file: NamedTempFile,
    stage: &'static str,
}

impl StagedMesh {
    /// Create an empty staged file named `<stem>_<stage>_*.obj` in `dir`.
    pub(crate) fn create(dir: &Path, stem: &str, stage: &'static str) -> AlignResult<Self> {
        let file = tempfile::Builder::new()
            .prefix(&format!("{stem}_{stage}_"))
            .suffix(".obj")
            .tempfile_in(dir)
            .map_err(|e| AlignError::io(dir, e))?;
        debug!(stage, path = %file.path().display(), "Created staged mesh");
        Ok(Self { file, stage })
    }

    pub(crate) fn path(&self) -> &Path {
        self.file.path()
    }

    /// Fill this file by streaming `input` through `map`.
    pub(crate) fn write_from<M: VertexMap>(
        &mut self,
        input: &Path,
        map: &M,
    ) -> AlignResult<RewriteStats> {
        let reader = open_mesh(input).map_err(|e| AlignError::from_stream(input, e))?;
        let writer = BufWriter::new(self.file.as_file_mut());
        let stats = rewrite_vertices(reader, writer, map)
            .map_err(|e| AlignError::from_rewrite(input, self.file.path(), e))?;
        debug!(
            stage = self.stage,
            vertices = stats.vertices,
            passthrough = stats.passthrough,
            "Wrote staged mesh"
        );
        Ok(stats)
    }

    /// Atomically move the finished file to `dest`, replacing any existing file.
    pub(crate) fn persist(self, dest: &Path) -> AlignResult<()> {
        self.file
            .persist(dest)
            .map(|_| ())
            .map_err(|e| AlignError::io(dest, e.error))
    }
}
