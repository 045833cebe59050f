//! Line-level OBJ record codec.
//!
//! Only geometric vertex records (`v x y z`) are interpreted. Everything else
//! (faces, normals, texture coordinates, groups, comments, blank lines) is a
//! pass-through record whose bytes are never decoded.

use std::io::{self, Write};

use mesh_types::Point3;

use crate::error::{IoError, IoResult};

/// One line of an OBJ file, classified.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ObjRecord {
    /// A `v` record with its three coordinates.
    Vertex(Point3<f64>),
    /// Any other line, to be copied verbatim.
    PassThrough,
}

impl ObjRecord {
    /// Classify and decode one raw line.
    ///
    /// `raw` may include its line terminator. `line` is the 1-based line
    /// number used in error reports.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::UnreadableRecord`] if the line is tagged `v` but
    /// does not carry exactly three finite decimal numbers.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_io::ObjRecord;
    /// use mesh_types::Point3;
    ///
    /// let v = ObjRecord::parse(b"v 1 -2.5 3e2\n", 1).unwrap();
    /// assert_eq!(v, ObjRecord::Vertex(Point3::new(1.0, -2.5, 300.0)));
    ///
    /// let n = ObjRecord::parse(b"vn 0 0 1\n", 2).unwrap();
    /// assert_eq!(n, ObjRecord::PassThrough);
    /// ```
    pub fn parse(raw: &[u8], line: usize) -> IoResult<Self> {
        if !is_vertex_tagged(raw) {
            return Ok(Self::PassThrough);
        }

        let text = std::str::from_utf8(raw).map_err(|_| IoError::unreadable(line, raw))?;
        let mut tokens = text.split_whitespace().skip(1);

        let mut coords = [0.0_f64; 3];
        for slot in &mut coords {
            *slot = tokens
                .next()
                .and_then(|token| token.parse::<f64>().ok())
                .filter(|value| value.is_finite())
                .ok_or_else(|| IoError::unreadable(line, raw))?;
        }
        if tokens.next().is_some() {
            return Err(IoError::unreadable(line, raw));
        }

        Ok(Self::Vertex(Point3::new(coords[0], coords[1], coords[2])))
    }

    /// Check whether this is a vertex record.
    #[must_use]
    pub const fn is_vertex(&self) -> bool {
        matches!(self, Self::Vertex(_))
    }
}

/// First whitespace-delimited token is exactly `v`.
fn is_vertex_tagged(raw: &[u8]) -> bool {
    let mut tokens = raw
        .split(u8::is_ascii_whitespace)
        .filter(|token| !token.is_empty());
    tokens.next() == Some(b"v".as_slice())
}

/// Write a vertex record as `v <x> <y> <z>` followed by a single `\n`.
///
/// Coordinates use the shortest decimal form that parses back to the same
/// `f64`.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_vertex<W: Write>(writer: &mut W, point: &Point3<f64>) -> io::Result<()> {
    writeln!(writer, "v {} {} {}", point.x, point.y, point.z)
}
