//! Euler-angle rotation applied as three sequential axis rotations.

use mesh_types::Point3;
use nalgebra::{Matrix3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::transform::VertexMap;

/// Rotation angles about the X, Y and Z axes, in degrees.
///
/// Missing axes default to 0 when deserialized, so `{"z": 90}` is a
/// rotation about Z only.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RotationAngles {
    /// Rotation about X in degrees.
    pub x: f64,
    /// Rotation about Y in degrees.
    pub y: f64,
    /// Rotation about Z in degrees.
    pub z: f64,
}

impl RotationAngles {
    /// Create rotation angles from degrees.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Check whether every angle is zero.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }

    /// The angles converted to radians.
    #[must_use]
    pub fn to_radians(&self) -> Vector3<f64> {
        Vector3::new(self.x.to_radians(), self.y.to_radians(), self.z.to_radians())
    }
}

/// Rotation about X, then Y, then Z.
///
/// Each axis rotation is a right-handed rotation matrix. They are applied
/// one after another to every point, X first, so the output of the X
/// rotation feeds the Y rotation which feeds the Z rotation.
///
/// # Example
///
/// ```
/// use mesh_transform::{EulerRotation, RotationAngles, VertexMap};
/// use mesh_types::Point3;
///
/// // (0, 1, 0) -> X 90 -> (0, 0, 1) -> Z 90 -> (0, 0, 1)
/// let rotation = EulerRotation::from_angles(&RotationAngles::new(90.0, 0.0, 90.0));
/// let p = rotation.map_point(Point3::new(0.0, 1.0, 0.0));
/// assert!((p.z - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EulerRotation {
    about_x: Matrix3<f64>,
    about_y: Matrix3<f64>,
    about_z: Matrix3<f64>,
}

impl EulerRotation {
    /// Build the three axis rotations from angles in degrees.
    #[must_use]
    pub fn from_angles(angles: &RotationAngles) -> Self {
        let radians = angles.to_radians();
        Self {
            about_x: rotation_x(radians.x),
            about_y: rotation_y(radians.y),
            about_z: rotation_z(radians.z),
        }
    }
}

impl VertexMap for EulerRotation {
    fn map_point(&self, point: Point3<f64>) -> Point3<f64> {
        let v = self.about_x * point.coords;
        let v = self.about_y * v;
        let v = self.about_z * v;
        Point3::from(v)
    }
}

#[rustfmt::skip]
fn rotation_x(angle: f64) -> Matrix3<f64> {
    let (sin_a, cos_a) = angle.sin_cos();
    Matrix3::new(
        1.0,   0.0,    0.0,
        0.0, cos_a, -sin_a,
        0.0, sin_a,  cos_a,
    )
}

#[rustfmt::skip]
fn rotation_y(angle: f64) -> Matrix3<f64> {
    let (sin_a, cos_a) = angle.sin_cos();
    Matrix3::new(
         cos_a, 0.0, sin_a,
           0.0, 1.0,   0.0,
        -sin_a, 0.0, cos_a,
    )
}

#[rustfmt::skip]
fn rotation_z(angle: f64) -> Matrix3<f64> {
    let (sin_a, cos_a) = angle.sin_cos();
    Matrix3::new(
        cos_a, -sin_a, 0.0,
        sin_a,  cos_a, 0.0,
          0.0,    0.0, 1.0,
    )
}
