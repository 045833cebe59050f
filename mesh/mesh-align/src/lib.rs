//! Fit one OBJ mesh into the bounding box of another.
//!
//! Given a mesh to move and a destination mesh, this crate:
//!
//! 1. Measures both axis-aligned bounding boxes
//! 2. Scales the mesh uniformly by the largest factor that keeps it inside
//!    the destination box on every axis
//! 3. Optionally rotates it about X, then Y, then Z
//! 4. Translates it so its bounding-box center lands on the destination's
//!
//! Every pass streams the OBJ file line by line (see `mesh-io`), rewriting
//! only `v` records and copying faces, normals, texture coordinates,
//! groups and comments untouched.
//!
//! # Layer 0
//!
//! This is a Layer 0 crate with zero Bevy dependencies.
//!
//! # Example
//!
//! ```no_run
//! use mesh_align::{AlignParams, align_mesh};
//!
//! let params = AlignParams::new("bolt.obj", "socket.obj").with_output("bolt_fitted.obj");
//! let report = align_mesh(&params).unwrap();
//!
//! println!("scale factor: {}", report.scale);
//! println!("saved to {}", report.output.display());
//! ```
//!
//! # Features
//!
//! - `serde` - derive `Serialize`/`Deserialize` for [`AlignParams`]

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod align;
mod error;
mod params;
mod result;
mod scale;
mod stage;

pub use align::align_mesh;
pub use error::{AlignError, AlignResult};
pub use params::{AlignParams, DEFAULT_OUTPUT_DIR, OUTPUT_SUFFIX};
pub use result::AlignmentReport;
pub use scale::solve_scale;
