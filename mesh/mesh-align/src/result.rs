//! Result types for alignment runs.

use std::path::PathBuf;

use mesh_transform::{Recenter, RotationAngles, VertexMap};
use mesh_types::{Aabb, Point3, Vector3};

/// Summary of a completed alignment.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignmentReport {
    /// Uniform scale factor applied to the mesh.
    pub scale: f64,

    /// Rotation applied after scaling, if any.
    pub rotation: Option<RotationAngles>,

    /// Bounds of the mesh to move, as read.
    pub source_bounds: Aabb,

    /// Bounds of the destination mesh.
    pub destination_bounds: Aabb,

    /// Bounds after scaling and rotation, before translation.
    pub transformed_bounds: Aabb,

    /// Vertex records written to the output.
    pub vertices: usize,

    /// Non-vertex lines copied to the output.
    pub passthrough: usize,

    /// Where the aligned mesh was written.
    pub output: PathBuf,
}

impl AlignmentReport {
    /// The center the aligned mesh was moved onto.
    #[must_use]
    pub fn final_center(&self) -> Point3<f64> {
        self.destination_bounds.center()
    }

    /// Translation applied in the final pass.
    #[must_use]
    pub fn translation(&self) -> Vector3<f64> {
        self.final_center() - self.transformed_bounds.center()
    }

    /// Bounds of the written mesh.
    #[must_use]
    pub fn final_bounds(&self) -> Aabb {
        let recenter = Recenter::between(&self.transformed_bounds, &self.destination_bounds);
        Aabb::new(
            recenter.map_point(self.transformed_bounds.min),
            recenter.map_point(self.transformed_bounds.max),
        )
    }

    /// Check whether a rotation pass ran.
    #[must_use]
    pub const fn was_rotated(&self) -> bool {
        self.rotation.is_some()
    }
}

impl std::fmt::Display for AlignmentReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let c = self.final_center();
        write!(
            f,
            "Alignment: scale {} ({}), centered at ({}, {}, {}), {} vertices → {}",
            self.scale,
            if self.was_rotated() { "rotated" } else { "not rotated" },
            c.x,
            c.y,
            c.z,
            self.vertices,
            self.output.display()
        )
    }
}
