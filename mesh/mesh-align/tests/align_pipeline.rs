//! End-to-end tests for the alignment pipeline.
//!
//! Every test works in its own temporary directory and checks both the
//! written output and that no staged files are left behind.

#![allow(clippy::unwrap_used)]
#![allow(clippy::float_cmp)]

use std::fs;
use std::path::{Path, PathBuf};

use approx::assert_relative_eq;
use mesh_align::{AlignError, AlignParams, align_mesh};
use mesh_io::analyze_file;
use mesh_transform::RotationAngles;
use mesh_types::{Axis, Point3, Vector3};
use tempfile::{TempDir, tempdir};

/// Axis-aligned box corners as an OBJ with faces, normals and comments.
fn box_obj(min: [f64; 3], max: [f64; 3]) -> String {
    let [x0, y0, z0] = min;
    let [x1, y1, z1] = max;
    format!(
        "# box\r\nmtllib box.mtl\no box\n\
         v {x0} {y0} {z0}\nv {x1} {y0} {z0}\nv {x1} {y1} {z0}\nv {x0} {y1} {z0}\n\
         v {x0} {y0} {z1}\nv {x1} {y0} {z1}\nv {x1} {y1} {z1}\nv {x0} {y1} {z1}\n\
         vn 0 0 -1\nvt 0 0\n\ng bottom\nusemtl grey\nf 1/1/1 2/1/1 3/1/1 4/1/1\n\
         g top\nf 5 6 7 8"
    )
}

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        Self {
            dir: tempdir().unwrap(),
        }
    }

    fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    fn work_dir(&self) -> PathBuf {
        self.dir.path().join("work")
    }

    fn output(&self) -> PathBuf {
        self.dir.path().join("patched").join("part_moved.obj")
    }

    fn params(&self, object: &Path, destination: &Path) -> AlignParams {
        AlignParams::new(object, destination)
            .with_output(self.output())
            .with_work_dir(self.work_dir())
    }

    fn assert_no_staged_files(&self) {
        for dir in [self.work_dir(), self.dir.path().join("patched")] {
            if !dir.exists() {
                continue;
            }
            let leftovers: Vec<_> = fs::read_dir(&dir)
                .unwrap()
                .map(|entry| entry.unwrap().file_name())
                .filter(|name| {
                    let name = name.to_string_lossy();
                    name.contains("_scaled_") || name.contains("_rotated_") || name.contains("_moved_")
                })
                .collect();
            assert!(leftovers.is_empty(), "staged files left in {dir:?}: {leftovers:?}");
        }
    }
}

fn non_vertex_lines(text: &str) -> Vec<&str> {
    text.split_inclusive('\n')
        .filter(|line| line.split_whitespace().next() != Some("v"))
        .collect()
}

#[test]
fn cube_fits_into_tall_box() {
    let ws = Workspace::new();
    let part = ws.write("part.obj", &box_obj([0.0; 3], [2.0; 3]));
    let slot = ws.write("slot.obj", &box_obj([0.0; 3], [4.0, 8.0, 4.0]));

    let report = align_mesh(&ws.params(&part, &slot)).unwrap();

    assert_eq!(report.scale, 2.0);
    assert!(!report.was_rotated());
    assert_eq!(report.transformed_bounds.center(), Point3::new(2.0, 2.0, 2.0));
    assert_eq!(report.final_center(), Point3::new(2.0, 4.0, 2.0));
    assert_eq!(report.vertices, 8);
    assert_eq!(report.output, ws.output());

    let written = fs::read_to_string(ws.output()).unwrap();
    let first_vertex = written.lines().find(|l| l.starts_with("v ")).unwrap();
    assert_eq!(first_vertex, "v 0 2 0");

    let bounds = analyze_file(ws.output()).unwrap();
    assert_eq!(bounds.aabb.min, Point3::new(0.0, 2.0, 0.0));
    assert_eq!(bounds.aabb.max, Point3::new(4.0, 6.0, 4.0));
    assert_eq!(bounds.aabb, report.final_bounds());

    ws.assert_no_staged_files();
}

#[test]
fn pass_through_lines_are_preserved() {
    let ws = Workspace::new();
    let source = box_obj([-1.0, 3.0, 5.0], [2.0, 4.5, 6.0]);
    let part = ws.write("part.obj", &source);
    let slot = ws.write("slot.obj", &box_obj([10.0; 3], [20.0; 3]));

    align_mesh(&ws.params(&part, &slot).with_rotation(RotationAngles::new(10.0, 20.0, 30.0)))
        .unwrap();

    let written = fs::read_to_string(ws.output()).unwrap();
    assert_eq!(non_vertex_lines(&written), non_vertex_lines(&source));
    assert!(written.starts_with("# box\r\n"));
    assert!(written.ends_with("f 5 6 7 8"));
}

#[test]
fn rotation_runs_between_scale_and_translation() {
    let ws = Workspace::new();
    let part = ws.write("part.obj", &box_obj([0.0; 3], [2.0, 1.0, 1.0]));
    let slot = ws.write("slot.obj", &box_obj([0.0; 3], [1.0, 2.0, 1.0]));

    let params = ws.params(&part, &slot).with_rotation(RotationAngles::new(0.0, 0.0, 90.0));
    let report = align_mesh(&params).unwrap();

    // min(1/2, 2/1, 1/1) = 0.5, so the part becomes 1 x 0.5 x 0.5 and the
    // quarter turn about Z swaps its footprint to 0.5 x 1.
    assert_eq!(report.scale, 0.5);
    assert!(report.was_rotated());
    assert_relative_eq!(report.transformed_bounds.min.x, -0.5, epsilon = 1e-12);
    assert_relative_eq!(report.transformed_bounds.max.y, 1.0, epsilon = 1e-12);

    let bounds = analyze_file(ws.output()).unwrap().aabb;
    assert_relative_eq!(bounds.min.x, 0.25, epsilon = 1e-12);
    assert_relative_eq!(bounds.max.x, 0.75, epsilon = 1e-12);
    assert_relative_eq!(bounds.min.y, 0.5, epsilon = 1e-12);
    assert_relative_eq!(bounds.max.y, 1.5, epsilon = 1e-12);
    assert_relative_eq!(bounds.min.z, 0.25, epsilon = 1e-12);
    assert_relative_eq!(bounds.max.z, 0.75, epsilon = 1e-12);

    ws.assert_no_staged_files();
}

#[test]
fn center_lands_on_destination_regardless_of_start() {
    let ws = Workspace::new();
    let part = ws.write("part.obj", &box_obj([-130.0, 7.5, 1e3], [-120.0, 9.0, 1.001e3]));
    let slot = ws.write("slot.obj", &box_obj([-3.0, -2.0, -1.0], [5.0, 4.0, 3.0]));

    let report = align_mesh(&ws.params(&part, &slot)).unwrap();

    let center = analyze_file(ws.output()).unwrap().center();
    assert_relative_eq!(center.x, 1.0, epsilon = 1e-9);
    assert_relative_eq!(center.y, 1.0, epsilon = 1e-9);
    assert_relative_eq!(center.z, 1.0, epsilon = 1e-9);

    let size = analyze_file(ws.output()).unwrap().aabb.size();
    let expected = report.source_bounds.size() * report.scale;
    assert_relative_eq!(size.x, expected.x, epsilon = 1e-9);
    assert_relative_eq!(size.y, expected.y, epsilon = 1e-9);
    assert_relative_eq!(size.z, expected.z, epsilon = 1e-9);
}

#[test]
fn output_may_replace_the_input() {
    let ws = Workspace::new();
    let part = ws.write("part.obj", &box_obj([0.0; 3], [1.0; 3]));
    let slot = ws.write("slot.obj", &box_obj([0.0; 3], [3.0; 3]));

    let params = AlignParams::new(&part, &slot)
        .with_output(&part)
        .with_work_dir(ws.work_dir());
    align_mesh(&params).unwrap();

    let bounds = analyze_file(&part).unwrap().aabb;
    assert_eq!(bounds.min, Point3::new(0.0, 0.0, 0.0));
    assert_eq!(bounds.max, Point3::new(3.0, 3.0, 3.0));
}

#[test]
fn flat_source_is_rejected_before_writing() {
    let ws = Workspace::new();
    let part = ws.write("part.obj", "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n");
    let slot = ws.write("slot.obj", &box_obj([0.0; 3], [1.0; 3]));

    let err = align_mesh(&ws.params(&part, &slot)).unwrap_err();

    match err {
        AlignError::DegenerateGeometry { axis, size } => {
            assert_eq!(axis, Axis::Z);
            assert_eq!(size, Vector3::new(1.0, 1.0, 0.0));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!ws.output().exists());
    ws.assert_no_staged_files();
}

#[test]
fn single_vertex_source_is_degenerate() {
    let ws = Workspace::new();
    let part = ws.write("part.obj", "v 1 2 3\n");
    let slot = ws.write("slot.obj", &box_obj([0.0; 3], [1.0; 3]));

    let err = align_mesh(&ws.params(&part, &slot)).unwrap_err();
    assert!(matches!(
        err,
        AlignError::DegenerateGeometry { axis: Axis::X, size } if size == Vector3::zeros()
    ));
}

#[test]
fn mesh_without_vertices_is_malformed() {
    let ws = Workspace::new();
    let part = ws.write("part.obj", &box_obj([0.0; 3], [1.0; 3]));
    let slot = ws.write("slot.obj", "# empty\ng nothing\n");

    let err = align_mesh(&ws.params(&part, &slot)).unwrap_err();

    assert!(matches!(err, AlignError::MalformedMesh { ref mesh } if mesh.ends_with("slot.obj")));
    assert!(!ws.output().exists());
}

#[test]
fn unreadable_vertex_aborts_and_keeps_old_output() {
    let ws = Workspace::new();
    let part = ws.write("part.obj", "v 0 0 0\nv 1 1 one\n");
    let slot = ws.write("slot.obj", &box_obj([0.0; 3], [1.0; 3]));

    fs::create_dir_all(ws.output().parent().unwrap()).unwrap();
    fs::write(ws.output(), "previous result\n").unwrap();

    let err = align_mesh(&ws.params(&part, &slot)).unwrap_err();

    match err {
        AlignError::UnreadableRecord { path, line, content } => {
            assert_eq!(path, part);
            assert_eq!(line, 2);
            assert_eq!(content, "v 1 1 one");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(fs::read_to_string(ws.output()).unwrap(), "previous result\n");
    ws.assert_no_staged_files();
}

#[test]
fn missing_destination_is_io_failure() {
    let ws = Workspace::new();
    let part = ws.write("part.obj", &box_obj([0.0; 3], [1.0; 3]));
    let missing = ws.dir.path().join("missing.obj");

    let err = align_mesh(&ws.params(&part, &missing)).unwrap_err();

    match err {
        AlignError::Io { path, source } => {
            assert_eq!(path, missing);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!ws.output().exists());
}
