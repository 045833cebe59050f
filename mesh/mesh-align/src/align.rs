//! The alignment pipeline.

use std::path::Path;

use mesh_io::{BoundsReport, analyze_file};
use mesh_transform::{EulerRotation, Recenter, UniformScale};
use tracing::{debug, info};

use crate::error::{AlignError, AlignResult};
use crate::params::AlignParams;
use crate::result::AlignmentReport;
use crate::scale::solve_scale;
use crate::stage::StagedMesh;

/// Scale, optionally rotate, and move a mesh into another mesh's bounding box.
///
/// The passes run in a fixed order:
///
/// 1. Analyze the bounds of the mesh to move and of the destination
/// 2. Solve the uniform scale factor ([`solve_scale`])
/// 3. Scale the mesh into a staged file
/// 4. If `params.rotation` is set, rotate the scaled mesh into a second staged file
/// 5. Re-analyze the staged mesh to get its current center
/// 6. Translate that center onto the destination center
/// 7. Rename the finished file onto the output path
///
/// Each pass reads one file and writes a new one; nothing is modified in
/// place, so the output may even name the input file. Staged files are
/// deleted on every exit path. The output path is touched only by the final
/// rename, so a failed run leaves no output behind.
///
/// # Errors
///
/// Returns the first error from any pass; see [`AlignError`].
///
/// # Example
///
/// ```no_run
/// use mesh_align::{AlignParams, align_mesh};
/// use mesh_transform::RotationAngles;
///
/// let params = AlignParams::new("bolt.obj", "socket.obj")
///     .with_rotation(RotationAngles::new(90.0, 0.0, 0.0));
/// let report = align_mesh(&params).unwrap();
/// println!("{report}");
/// ```
pub fn align_mesh(params: &AlignParams) -> AlignResult<AlignmentReport> {
    let source = analyze(&params.object_to_move)?;
    let destination = analyze(&params.destination)?;

    info!(
        object = %params.object_to_move.display(),
        destination = %params.destination.display(),
        source_vertices = source.vertex_count,
        destination_vertices = destination.vertex_count,
        "Starting mesh alignment"
    );

    let scale = solve_scale(&source.aabb, &destination.aabb)?;
    info!(scale, "Solved uniform scale factor");

    let work_dir = params.work_dir();
    ensure_dir(&work_dir)?;
    let stem = params.mesh_stem();

    let mut scaled = StagedMesh::create(&work_dir, &stem, "scaled")?;
    scaled.write_from(&params.object_to_move, &UniformScale::new(scale))?;

    let transformed = match &params.rotation {
        Some(angles) => {
            let mut rotated = StagedMesh::create(&work_dir, &stem, "rotated")?;
            rotated.write_from(scaled.path(), &EulerRotation::from_angles(angles))?;
            debug!(x = angles.x, y = angles.y, z = angles.z, "Applied rotation");
            drop(scaled);
            rotated
        }
        None => scaled,
    };

    // Scaling and rotation both move the center, so it is measured afresh.
    let current = analyze(transformed.path())?;
    let recenter = Recenter::new(current.center(), destination.center());

    let output = params.output_path();
    let output_dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    ensure_dir(output_dir)?;

    let mut moved = StagedMesh::create(output_dir, &stem, "moved")?;
    let stats = moved.write_from(transformed.path(), &recenter)?;
    drop(transformed);
    moved.persist(&output)?;

    let report = AlignmentReport {
        scale,
        rotation: params.rotation,
        source_bounds: source.aabb,
        destination_bounds: destination.aabb,
        transformed_bounds: current.aabb,
        vertices: stats.vertices,
        passthrough: stats.passthrough,
        output,
    };

    info!(
        output = %report.output.display(),
        vertices = report.vertices,
        "Alignment complete"
    );

    Ok(report)
}

fn analyze(path: &Path) -> AlignResult<BoundsReport> {
    analyze_file(path).map_err(|e| AlignError::from_stream(path, e))
}

fn ensure_dir(dir: &Path) -> AlignResult<()> {
    std::fs::create_dir_all(dir).map_err(|e| AlignError::io(dir, e))
}
