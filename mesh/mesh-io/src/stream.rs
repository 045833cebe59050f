//! Single-pass streaming over OBJ files.
//!
//! Both operations read the input line by line and never hold more than one
//! line in memory, so they scale to meshes of any size.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use mesh_transform::VertexMap;
use mesh_types::{Aabb, Point3};
use tempfile::Builder;
use tracing::debug;

use crate::error::{IoError, IoResult};
use crate::obj::{ObjRecord, write_vertex};

/// Bounds of the vertex records in one mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundsReport {
    /// Axis-aligned box around every vertex.
    pub aabb: Aabb,
    /// Number of vertex records scanned.
    pub vertex_count: usize,
}

impl BoundsReport {
    /// Center of the bounding box.
    #[must_use]
    pub fn center(&self) -> Point3<f64> {
        self.aabb.center()
    }
}

/// Line counts from one rewrite pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewriteStats {
    /// Vertex records rewritten.
    pub vertices: usize,
    /// Lines copied unchanged.
    pub passthrough: usize,
}

/// Compute the bounding box of every vertex record in `reader`.
///
/// Reads each line exactly once, in order. Non-vertex lines are skipped
/// without being decoded.
///
/// # Errors
///
/// - [`IoError::UnreadableRecord`] if a `v` line is malformed
/// - [`IoError::NoVertices`] if the input has no vertex records
/// - [`IoError::Io`] if reading fails
///
/// # Example
///
/// ```
/// use mesh_io::analyze_bounds;
/// use mesh_types::Point3;
///
/// let obj = "# cube corners\nv 0 0 0\nv 2 2 2\nf 1 2 1\n";
/// let report = analyze_bounds(obj.as_bytes()).unwrap();
///
/// assert_eq!(report.vertex_count, 2);
/// assert_eq!(report.center(), Point3::new(1.0, 1.0, 1.0));
/// ```
pub fn analyze_bounds<R: BufRead>(mut reader: R) -> IoResult<BoundsReport> {
    let mut aabb = Aabb::empty();
    let mut vertex_count = 0;
    let mut buf = Vec::new();
    let mut line = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line += 1;

        if let ObjRecord::Vertex(point) = ObjRecord::parse(&buf, line)? {
            aabb.expand_to_include(&point);
            vertex_count += 1;
        }
    }

    if vertex_count == 0 || aabb.is_empty() {
        return Err(IoError::NoVertices);
    }

    debug!(vertex_count, lines = line, "Scanned mesh bounds");

    Ok(BoundsReport { aabb, vertex_count })
}

/// Stream `reader` into `writer`, mapping every vertex through `map`.
///
/// Vertex records are re-encoded as `v <x> <y> <z>\n`. Every other line is
/// copied byte for byte, including its original terminator (or lack of one
/// on the final line). Output order mirrors input order exactly. The writer
/// is flushed before returning.
///
/// On error the output written so far is incomplete and must be discarded
/// by the caller.
///
/// # Errors
///
/// - [`IoError::UnreadableRecord`] if a `v` line is malformed
/// - [`IoError::Io`] if reading fails
/// - [`IoError::Write`] if writing or flushing fails
///
/// # Example
///
/// ```
/// use mesh_io::rewrite_vertices;
/// use mesh_transform::UniformScale;
///
/// let input = "o part\r\nv 1 2 3\r\nf 1 1 1";
/// let mut output = Vec::new();
/// let stats = rewrite_vertices(input.as_bytes(), &mut output, &UniformScale::new(2.0)).unwrap();
///
/// assert_eq!(String::from_utf8(output).unwrap(), "o part\r\nv 2 4 6\nf 1 1 1");
/// assert_eq!(stats.vertices, 1);
/// assert_eq!(stats.passthrough, 2);
/// ```
pub fn rewrite_vertices<R, W, M>(mut reader: R, mut writer: W, map: &M) -> IoResult<RewriteStats>
where
    R: BufRead,
    W: Write,
    M: VertexMap + ?Sized,
{
    let mut stats = RewriteStats::default();
    let mut buf = Vec::new();
    let mut line = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line += 1;

        match ObjRecord::parse(&buf, line)? {
            ObjRecord::Vertex(point) => {
                write_vertex(&mut writer, &map.map_point(point)).map_err(IoError::Write)?;
                stats.vertices += 1;
            }
            ObjRecord::PassThrough => {
                writer.write_all(&buf).map_err(IoError::Write)?;
                stats.passthrough += 1;
            }
        }
    }

    writer.flush().map_err(IoError::Write)?;
    Ok(stats)
}

/// Open a mesh file for buffered reading.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if the path does not exist, or
/// [`IoError::Io`] for any other open failure.
pub fn open_mesh<P: AsRef<Path>>(path: P) -> IoResult<BufReader<File>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IoError::FileNotFound {
                path: path.to_path_buf(),
                source: e,
            }
        } else {
            IoError::Io(e)
        }
    })?;
    Ok(BufReader::new(file))
}

/// Compute the bounds of the mesh file at `path`.
///
/// # Errors
///
/// See [`analyze_bounds`] and [`open_mesh`].
pub fn analyze_file<P: AsRef<Path>>(path: P) -> IoResult<BoundsReport> {
    analyze_bounds(open_mesh(path)?)
}

/// Rewrite the mesh file at `input` into `output`.
///
/// The rewritten mesh goes to a temporary file beside `output` and is
/// renamed over it once complete, so `output` may name `input` itself. On
/// error `output` is left as it was.
///
/// # Errors
///
/// See [`rewrite_vertices`] and [`open_mesh`]. Failing to create or rename
/// the temporary file is [`IoError::Write`].
pub fn rewrite_file<P, Q, M>(input: P, output: Q, map: &M) -> IoResult<RewriteStats>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    M: VertexMap + ?Sized,
{
    let output = output.as_ref();
    let dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let reader = open_mesh(input)?;
    let mut staged = Builder::new()
        .suffix(".obj")
        .tempfile_in(dir)
        .map_err(IoError::Write)?;
    let stats = rewrite_vertices(reader, BufWriter::new(staged.as_file_mut()), map)?;
    staged.persist(output).map_err(|e| IoError::Write(e.error))?;

    Ok(stats)
}
