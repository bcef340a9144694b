mod cylinder;
mod slab;
mod sphere;

pub use cylinder::Cylinder;
pub use slab::{Bump, Slab};
pub use sphere::Sphere;

use crate::math::Point3;

/// Parameter domain for a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceDomain {
    /// Start of the U parameter range.
    pub u_min: f64,
    /// End of the U parameter range.
    pub u_max: f64,
    /// Start of the V parameter range.
    pub v_min: f64,
    /// End of the V parameter range.
    pub v_max: f64,
}

impl SurfaceDomain {
    /// Creates a new surface domain.
    #[must_use]
    pub fn new(u_min: f64, u_max: f64, v_min: f64, v_max: f64) -> Self {
        Self {
            u_min,
            u_max,
            v_min,
            v_max,
        }
    }

    /// The unit square `[0, 1] x [0, 1]`.
    #[must_use]
    pub fn unit() -> Self {
        Self::new(0.0, 1.0, 0.0, 1.0)
    }
}

/// Trait for bounded parametric surfaces in 3D space.
///
/// Evaluation is analytic and total over the domain, so it cannot fail.
pub trait Surface {
    /// Evaluates the surface at parameters `(u, v)`.
    fn evaluate(&self, u: f64, v: f64) -> Point3;

    /// Returns the parameter domain sampled when the surface is gridded.
    fn domain(&self) -> SurfaceDomain;
}
