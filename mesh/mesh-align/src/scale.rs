//! Uniform scale factor between two bounding boxes.

use mesh_types::{Aabb, Axis};

use crate::error::{AlignError, AlignResult};

/// Largest uniform scale that fits `source` inside `destination` on every axis.
///
/// Computes `destination_size / source_size` per axis and returns the
/// smallest ratio. The scaled source then matches the destination along its
/// tightest axis and under-fills the other two; the mesh is never stretched
/// anisotropically.
///
/// # Errors
///
/// - [`AlignError::MalformedMesh`] if either box is empty
/// - [`AlignError::DegenerateGeometry`] if `source` has zero size along any
///   axis, checked before any division
///
/// # Example
///
/// ```
/// use mesh_align::solve_scale;
/// use mesh_types::{Aabb, Point3};
///
/// let cube = Aabb::new(Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 2.0, 2.0));
/// let slot = Aabb::new(Point3::new(0.0, 0.0, 0.0), Point3::new(4.0, 8.0, 4.0));
///
/// assert_eq!(solve_scale(&cube, &slot).unwrap(), 2.0);
/// ```
pub fn solve_scale(source: &Aabb, destination: &Aabb) -> AlignResult<f64> {
    if source.is_empty() {
        return Err(AlignError::MalformedMesh {
            mesh: "source bounds".to_string(),
        });
    }
    if destination.is_empty() {
        return Err(AlignError::MalformedMesh {
            mesh: "destination bounds".to_string(),
        });
    }
    if let Some(axis) = source.degenerate_axis() {
        return Err(AlignError::DegenerateGeometry {
            axis,
            size: source.size(),
        });
    }

    let ratio = |axis: Axis| destination.extent(axis) / source.extent(axis);
    Ok(ratio(Axis::X).min(ratio(Axis::Y)).min(ratio(Axis::Z)))
}
