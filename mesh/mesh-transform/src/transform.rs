//! The per-vertex map capability and the affine maps built on it.

use mesh_types::{Aabb, Point3};

/// A coordinate mapping applied independently to each vertex.
///
/// Implementations must be pure: the output depends only on the input point,
/// so a mesh can be streamed one vertex at a time in file order.
///
/// Closures taking and returning a [`Point3`] implement this trait, which is
/// handy for one-off maps in tests.
///
/// # Example
///
/// ```
/// use mesh_transform::VertexMap;
/// use mesh_types::Point3;
///
/// let mirror = |p: Point3<f64>| Point3::new(-p.x, p.y, p.z);
/// assert_eq!(mirror.map_point(Point3::new(1.0, 2.0, 3.0)), Point3::new(-1.0, 2.0, 3.0));
/// ```
pub trait VertexMap {
    /// Map one vertex position to its new position.
    fn map_point(&self, point: Point3<f64>) -> Point3<f64>;
}

impl<F> VertexMap for F
where
    F: Fn(Point3<f64>) -> Point3<f64>,
{
    fn map_point(&self, point: Point3<f64>) -> Point3<f64> {
        self(point)
    }
}

/// Uniform scaling about the origin.
///
/// The same factor is applied to all three axes; no anisotropic stretch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformScale {
    factor: f64,
}

impl UniformScale {
    /// Create a uniform scale by `factor`.
    #[must_use]
    pub const fn new(factor: f64) -> Self {
        Self { factor }
    }

    /// The scale factor.
    #[must_use]
    pub const fn factor(&self) -> f64 {
        self.factor
    }
}

impl VertexMap for UniformScale {
    fn map_point(&self, point: Point3<f64>) -> Point3<f64> {
        Point3::new(
            point.x * self.factor,
            point.y * self.factor,
            point.z * self.factor,
        )
    }
}

/// Translation that carries `current` onto `target`.
///
/// Each coordinate is computed as `p - current + target`, in that order,
/// so the result matches subtracting the old center before adding the new.
///
/// # Example
///
/// ```
/// use mesh_transform::{Recenter, VertexMap};
/// use mesh_types::Point3;
///
/// let recenter = Recenter::new(Point3::new(2.0, 2.0, 2.0), Point3::new(2.0, 4.0, 2.0));
/// assert_eq!(recenter.map_point(Point3::new(0.0, 0.0, 0.0)), Point3::new(0.0, 2.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Recenter {
    current: Point3<f64>,
    target: Point3<f64>,
}

impl Recenter {
    /// Create a translation from the `current` center to the `target` center.
    #[must_use]
    pub const fn new(current: Point3<f64>, target: Point3<f64>) -> Self {
        Self { current, target }
    }

    /// Recenter a mesh with bounds `current` onto the center of `target`.
    #[must_use]
    pub fn between(current: &Aabb, target: &Aabb) -> Self {
        Self::new(current.center(), target.center())
    }

    /// The center being moved.
    #[must_use]
    pub const fn current(&self) -> Point3<f64> {
        self.current
    }

    /// The center being moved onto.
    #[must_use]
    pub const fn target(&self) -> Point3<f64> {
        self.target
    }
}

impl VertexMap for Recenter {
    fn map_point(&self, point: Point3<f64>) -> Point3<f64> {
        Point3::new(
            point.x - self.current.x + self.target.x,
            point.y - self.current.y + self.target.y,
            point.z - self.current.z + self.target.z,
        )
    }
}
