use std::f64::consts::TAU;

use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};

use super::{Surface, SurfaceDomain};

/// A vertical (z-axis) cylinder of finite height.
///
/// `P(u, v) = base + (r * cos(u), r * sin(u), v)` with `u` in `[0, 2*pi]`
/// and `v` in `[0, height]`.
#[derive(Debug, Clone)]
pub struct Cylinder {
    base: Point3,
    radius: f64,
    height: f64,
}

impl Cylinder {
    /// Creates a new cylinder standing on `base`.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius or height is not positive.
    pub fn new(base: Point3, radius: f64, height: f64) -> Result<Self> {
        if radius.is_nan() || radius < TOLERANCE {
            return Err(
                GeometryError::Degenerate("cylinder radius must be positive".into()).into(),
            );
        }
        if height.is_nan() || height < TOLERANCE {
            return Err(
                GeometryError::Degenerate("cylinder height must be positive".into()).into(),
            );
        }
        Ok(Self {
            base,
            radius,
            height,
        })
    }

    /// Creates a cylinder, raising a radius or height below [`TOLERANCE`]
    /// (or NaN) to [`TOLERANCE`].
    #[must_use]
    pub fn clamped(base: Point3, radius: f64, height: f64) -> Self {
        let at_least = |value: f64| if value >= TOLERANCE { value } else { TOLERANCE };
        Self {
            base,
            radius: at_least(radius),
            height: at_least(height),
        }
    }

    /// Returns the center of the bottom circle.
    #[must_use]
    pub fn base(&self) -> &Point3 {
        &self.base
    }

    /// Returns the radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// `segments` points evenly spaced around the circle at height `v`,
    /// starting at angle 0 and not repeating it.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn ring(&self, v: f64, segments: usize) -> Vec<Point3> {
        (0..segments)
            .map(|i| self.evaluate(TAU * i as f64 / segments as f64, v))
            .collect()
    }
}

impl Surface for Cylinder {
    fn evaluate(&self, u: f64, v: f64) -> Point3 {
        let (su, cu) = u.sin_cos();
        self.base + Vector3::new(self.radius * cu, self.radius * su, v)
    }

    fn domain(&self) -> SurfaceDomain {
        SurfaceDomain::new(0.0, TAU, 0.0, self.height)
    }
}
