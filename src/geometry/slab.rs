use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};

use super::{Surface, SurfaceDomain};

/// A Gaussian displacement on a [`Slab`], in parameter space.
///
/// `d(u, v) = amplitude * exp(-((u - cu)^2 / (2 su^2) + (v - cv)^2 / (2 sv^2)))`.
/// Negative amplitudes make dimples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bump {
    pub center_u: f64,
    pub center_v: f64,
    pub sigma_u: f64,
    pub sigma_v: f64,
    pub amplitude: f64,
}

impl Bump {
    /// Displacement contributed at `(u, v)`.
    #[must_use]
    pub fn height_at(&self, u: f64, v: f64) -> f64 {
        let du = (u - self.center_u) / self.sigma_u;
        let dv = (v - self.center_v) / self.sigma_v;
        self.amplitude * (-0.5 * (du * du + dv * dv)).exp()
    }
}

/// A bounded planar panel, optionally displaced along its normal.
///
/// `P(u, v) = origin + u * u_edge + v * v_edge + d(u, v) * normal` for
/// `u, v` in `[0, 1]`, where `d` is the sum of all bumps and
/// `normal = normalize(u_edge x v_edge)`.
#[derive(Debug, Clone)]
pub struct Slab {
    origin: Point3,
    u_edge: Vector3,
    v_edge: Vector3,
    normal: Vector3,
    bumps: Vec<Bump>,
}

impl Slab {
    /// Creates a slab spanning `u_edge` and `v_edge` from `origin`.
    ///
    /// # Errors
    ///
    /// Returns an error if either edge is zero-length or the edges are parallel.
    pub fn new(origin: Point3, u_edge: Vector3, v_edge: Vector3) -> Result<Self> {
        if u_edge.norm() < TOLERANCE || v_edge.norm() < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        let normal = u_edge.cross(&v_edge);
        let normal_len = normal.norm();
        if normal_len < TOLERANCE {
            return Err(GeometryError::Degenerate("slab edges are parallel".into()).into());
        }
        Ok(Self {
            origin,
            u_edge,
            v_edge,
            normal: normal / normal_len,
            bumps: Vec::new(),
        })
    }

    /// A horizontal slab at height `z`, centered on `(cx, cy)`. Normal is `+z`.
    #[must_use]
    pub fn horizontal(cx: f64, cy: f64, width: f64, depth: f64, z: f64) -> Self {
        Self {
            origin: Point3::new(cx - width / 2.0, cy - depth / 2.0, z),
            u_edge: Vector3::x() * width,
            v_edge: Vector3::y() * depth,
            normal: Vector3::z(),
            bumps: Vec::new(),
        }
    }

    /// A vertical slab in the plane `y = const`, spanning x across `width`
    /// (centered on 0) and z from `z_min` to `z_max`. Normal is `-y`.
    #[must_use]
    pub fn facing_front(y: f64, width: f64, z_min: f64, z_max: f64) -> Self {
        Self {
            origin: Point3::new(-width / 2.0, y, z_min),
            u_edge: Vector3::x() * width,
            v_edge: Vector3::z() * (z_max - z_min),
            normal: -Vector3::y(),
            bumps: Vec::new(),
        }
    }

    /// A vertical slab in the plane `x = const`, spanning y across `depth`
    /// (centered on 0) and z from `z_min` to `z_max`. Normal is `+x`.
    #[must_use]
    pub fn facing_side(x: f64, depth: f64, z_min: f64, z_max: f64) -> Self {
        Self {
            origin: Point3::new(x, -depth / 2.0, z_min),
            u_edge: Vector3::y() * depth,
            v_edge: Vector3::z() * (z_max - z_min),
            normal: Vector3::x(),
            bumps: Vec::new(),
        }
    }

    /// Adds a Gaussian displacement.
    #[must_use]
    pub fn with_bump(mut self, bump: Bump) -> Self {
        self.bumps.push(bump);
        self
    }

    /// Returns the corner at `(u, v) = (0, 0)`.
    #[must_use]
    pub fn origin(&self) -> &Point3 {
        &self.origin
    }

    /// Returns the unit normal.
    #[must_use]
    pub fn normal(&self) -> &Vector3 {
        &self.normal
    }

    /// Returns the displacements applied to the slab.
    #[must_use]
    pub fn bumps(&self) -> &[Bump] {
        &self.bumps
    }

    /// Total displacement along the normal at `(u, v)`.
    #[must_use]
    pub fn displacement(&self, u: f64, v: f64) -> f64 {
        self.bumps.iter().map(|b| b.height_at(u, v)).sum()
    }
}

impl Surface for Slab {
    fn evaluate(&self, u: f64, v: f64) -> Point3 {
        self.origin + self.u_edge * u + self.v_edge * v + self.normal * self.displacement(u, v)
    }

    fn domain(&self) -> SurfaceDomain {
        SurfaceDomain::unit()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn horizontal_corners() {
        let s = Slab::horizontal(0.0, 0.0, 120.0, 80.0, 45.0);
        let p = s.evaluate(0.0, 0.0);
        assert!((p - Point3::new(-60.0, -40.0, 45.0)).norm() < TOLERANCE);
        let p = s.evaluate(1.0, 1.0);
        assert!((p - Point3::new(60.0, 40.0, 45.0)).norm() < TOLERANCE);
    }

    #[test]
    fn facing_front_spans_height() {
        let s = Slab::facing_front(10.0, 50.0, 20.0, 80.0);
        let top = s.evaluate(0.5, 1.0);
        assert!((top - Point3::new(0.0, 10.0, 80.0)).norm() < TOLERANCE);
        assert!((s.normal() + Vector3::y()).norm() < TOLERANCE);
    }

    #[test]
    fn facing_side_spans_depth() {
        let s = Slab::facing_side(-90.0, 45.0, 0.0, 240.0);
        let p = s.evaluate(1.0, 0.5);
        assert!((p - Point3::new(-90.0, 22.5, 120.0)).norm() < TOLERANCE);
    }

    #[test]
    fn bump_peaks_at_center() {
        let bump = Bump {
            center_u: 0.5,
            center_v: 0.5,
            sigma_u: 0.1,
            sigma_v: 0.1,
            amplitude: 3.0,
        };
        let s = Slab::horizontal(0.0, 0.0, 10.0, 10.0, 1.0).with_bump(bump);
        assert_relative_eq!(s.evaluate(0.5, 0.5).z, 4.0, epsilon = 1e-12);
        assert!(s.evaluate(0.0, 0.0).z - 1.0 < 1e-9);
        assert!(s.evaluate(0.6, 0.5).z < s.evaluate(0.5, 0.5).z);
    }

    #[test]
    fn negative_bump_is_a_dimple() {
        let bump = Bump {
            center_u: 0.5,
            center_v: 0.5,
            sigma_u: 0.2,
            sigma_v: 0.2,
            amplitude: -2.0,
        };
        let s = Slab::horizontal(0.0, 0.0, 10.0, 10.0, 5.0).with_bump(bump);
        assert_relative_eq!(s.evaluate(0.5, 0.5).z, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn new_rejects_degenerate_edges() {
        assert!(Slab::new(Point3::origin(), Vector3::zeros(), Vector3::y()).is_err());
        assert!(Slab::new(Point3::origin(), Vector3::x(), Vector3::x() * 2.0).is_err());
        let s = Slab::new(Point3::origin(), Vector3::x(), Vector3::y()).unwrap();
        assert!((s.normal() - Vector3::z()).norm() < TOLERANCE);
    }
}
