//! Per-vertex transforms for mesh alignment.
//!
//! Every transform in this crate implements [`VertexMap`], a single
//! `(x, y, z) -> (x', y', z')` capability. Streaming rewriters (see `mesh-io`)
//! take any `VertexMap`, so scaling, rotating, and recentering share one
//! file-rewrite routine.
//!
//! - [`UniformScale`] - multiply every coordinate by one factor
//! - [`EulerRotation`] - rotate about X, then Y, then Z
//! - [`Recenter`] - move a center point onto a target point
//!
//! # Layer 0
//!
//! This is a Layer 0 crate with zero Bevy dependencies.
//!
//! # Example
//!
//! ```
//! use mesh_transform::{EulerRotation, RotationAngles, UniformScale, VertexMap};
//! use mesh_types::Point3;
//!
//! let scale = UniformScale::new(2.0);
//! assert_eq!(scale.map_point(Point3::new(1.0, 2.0, 3.0)), Point3::new(2.0, 4.0, 6.0));
//!
//! let rotation = EulerRotation::from_angles(&RotationAngles::new(0.0, 0.0, 90.0));
//! let p = rotation.map_point(Point3::new(1.0, 0.0, 0.0));
//! assert!((p.y - 1.0).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod rotation;
mod transform;

pub use rotation::{EulerRotation, RotationAngles};
pub use transform::{Recenter, UniformScale, VertexMap};
