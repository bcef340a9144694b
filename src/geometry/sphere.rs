use std::f64::consts::{FRAC_PI_2, TAU};

use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};

use super::{Surface, SurfaceDomain};

/// A z-up spherical surface.
///
/// `P(u, v) = center + r * (cos(v) cos(u), cos(v) sin(u), sin(v))`
///
/// Parameters: `u` = longitude `[0, 2*pi]`, `v` = latitude `[-pi/2, pi/2]`.
#[derive(Debug, Clone)]
pub struct Sphere {
    center: Point3,
    radius: f64,
}

impl Sphere {
    /// Creates a new sphere.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not positive.
    pub fn new(center: Point3, radius: f64) -> Result<Self> {
        if radius.is_nan() || radius < TOLERANCE {
            return Err(
                GeometryError::Degenerate("sphere radius must be positive".into()).into(),
            );
        }
        Ok(Self { center, radius })
    }

    /// The unit sphere centered at the origin.
    #[must_use]
    pub fn unit() -> Self {
        Self {
            center: Point3::origin(),
            radius: 1.0,
        }
    }

    /// Returns the center of the sphere.
    #[must_use]
    pub fn center(&self) -> &Point3 {
        &self.center
    }

    /// Returns the radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Surface for Sphere {
    fn evaluate(&self, u: f64, v: f64) -> Point3 {
        let (su, cu) = u.sin_cos();
        let (sv, cv) = v.sin_cos();
        self.center + Vector3::new(cv * cu, cv * su, sv) * self.radius
    }

    fn domain(&self) -> SurfaceDomain {
        SurfaceDomain::new(0.0, TAU, -FRAC_PI_2, FRAC_PI_2)
    }
}
