//! Core geometric types for mesh alignment.
//!
//! This crate provides the foundational types shared by the alignment crates:
//!
//! - [`Aabb`] - Axis-aligned bounding box with size and center
//! - [`Axis`] - Names one of the three coordinate axes
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero Bevy dependencies**. It can be used in
//! CLI tools, servers, and other crates that only need plain geometry.
//!
//! # Units
//!
//! This library is **unit-agnostic**. All coordinates are `f64`.
//!
//! # Coordinate System
//!
//! Uses a **right-handed coordinate system**. Rotations elsewhere in the
//! workspace follow the right-hand rule about each axis.
//!
//! # Example
//!
//! ```
//! use mesh_types::{Aabb, Point3};
//!
//! let points = [Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 2.0, 2.0)];
//! let aabb = Aabb::from_points(points.iter());
//!
//! assert_eq!(aabb.center(), Point3::new(1.0, 1.0, 1.0));
//! assert_eq!(aabb.degenerate_axis(), None);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod bounds;

pub use bounds::{Aabb, Axis};

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
