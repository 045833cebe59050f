//! Streaming OBJ I/O for mesh alignment.
//!
//! This crate reads and rewrites Wavefront OBJ files one line at a time:
//!
//! - [`analyze_bounds`] - one pass over the vertex records, producing an [`Aabb`](mesh_types::Aabb)
//! - [`rewrite_vertices`] - one pass that maps each vertex through a
//!   [`VertexMap`](mesh_transform::VertexMap) and copies every other line verbatim
//!
//! Only `v x y z` records are interpreted. Faces, normals, texture
//! coordinates, groups, materials and comments are treated as opaque bytes,
//! so the rewritten file differs from its input only on vertex lines.
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero Bevy dependencies**.
//!
//! # Example
//!
//! ```no_run
//! use mesh_io::{analyze_file, rewrite_file};
//! use mesh_transform::UniformScale;
//!
//! let bounds = analyze_file("model.obj").unwrap();
//! println!("center: {}", bounds.center());
//!
//! rewrite_file("model.obj", "model_scaled.obj", &UniformScale::new(2.0)).unwrap();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod error;
mod obj;
mod stream;

pub use error::{IoError, IoResult};
pub use obj::{ObjRecord, write_vertex};
pub use stream::{
    BoundsReport, RewriteStats, analyze_bounds, analyze_file, open_mesh, rewrite_file,
    rewrite_vertices,
};
