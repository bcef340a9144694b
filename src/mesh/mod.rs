//! Renderer-independent mesh description.
//!
//! A [`Mesh`] is a set of sampled surface grids plus explicit line and
//! point primitives. Display styles travel with each part as plain data;
//! nothing here draws anything.

mod sample;

pub use sample::sample_grid;

use serde::{Deserialize, Serialize};

use crate::catalog::Archetype;
use crate::math::Point3;

/// Named color scale a renderer should shade a part with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorScale {
    Viridis,
    Browns,
    Blues,
    Greys,
    Cividis,
}

impl ColorScale {
    /// The scale's conventional name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ColorScale::Viridis => "Viridis",
            ColorScale::Browns => "Browns",
            ColorScale::Blues => "Blues",
            ColorScale::Greys => "Greys",
            ColorScale::Cividis => "Cividis",
        }
    }
}

/// Display metadata attached to a patch or primitive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayStyle {
    pub color_scale: ColorScale,
    /// In `(0, 1]`.
    pub opacity: f64,
}

impl DisplayStyle {
    /// Creates a style, clamping opacity into `(0, 1]`.
    #[must_use]
    pub fn new(color_scale: ColorScale, opacity: f64) -> Self {
        let opacity = if opacity.is_nan() {
            1.0
        } else {
            opacity.clamp(f64::EPSILON, 1.0)
        };
        Self {
            color_scale,
            opacity,
        }
    }

    /// A fully opaque style.
    #[must_use]
    pub fn opaque(color_scale: ColorScale) -> Self {
        Self::new(color_scale, 1.0)
    }
}

/// What a part of a mesh represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartRole {
    Base,
    Cushion,
    Seat,
    Backrest,
    Top,
    Leg,
    SidePanel,
    BackPanel,
    Shelf,
    Shell,
}

/// A rectangular grid of surface points.
///
/// `points[j][i]` is the point at `(u[i], v[j])`: rows follow `v`, columns
/// follow `u`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfacePatch {
    pub name: String,
    pub role: PartRole,
    pub u: Vec<f64>,
    pub v: Vec<f64>,
    pub points: Vec<Vec<Point3>>,
    pub style: DisplayStyle,
}

impl SurfacePatch {
    /// Number of `(rows, cols)` in the grid.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.v.len(), self.u.len())
    }

    /// Returns `true` if the grid holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.iter().all(Vec::is_empty)
    }

    /// The x coordinate of every grid point, row by row.
    #[must_use]
    pub fn x_grid(&self) -> Vec<Vec<f64>> {
        self.component(|p| p.x)
    }

    /// The y coordinate of every grid point, row by row.
    #[must_use]
    pub fn y_grid(&self) -> Vec<Vec<f64>> {
        self.component(|p| p.y)
    }

    /// The z coordinate of every grid point, row by row.
    #[must_use]
    pub fn z_grid(&self) -> Vec<Vec<f64>> {
        self.component(|p| p.z)
    }

    fn component(&self, f: impl Fn(&Point3) -> f64) -> Vec<Vec<f64>> {
        self.points
            .iter()
            .map(|row| row.iter().map(&f).collect())
            .collect()
    }
}

/// How a primitive's points should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimitiveKind {
    /// Consecutive points joined by straight segments.
    Lines,
    /// Unconnected point markers.
    Markers,
}

/// An explicit list of points drawn as lines or markers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Primitive {
    pub name: String,
    pub role: PartRole,
    pub kind: PrimitiveKind,
    pub points: Vec<Point3>,
    pub style: DisplayStyle,
}

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point3,
    /// Maximum corner of the bounding box.
    pub max: Point3,
}

impl Aabb {
    fn from_points<'a>(points: impl IntoIterator<Item = &'a Point3>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = *iter.next()?;
        Some(iter.fold(Aabb { min: first, max: first }, |b, p| Aabb {
            min: b.min.inf(p),
            max: b.max.sup(p),
        }))
    }
}

/// Procedural geometry for one piece of furniture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    pub name: String,
    pub archetype: Archetype,
    pub patches: Vec<SurfacePatch>,
    pub primitives: Vec<Primitive>,
}

impl Mesh {
    /// Creates an empty mesh.
    #[must_use]
    pub fn new(name: impl Into<String>, archetype: Archetype) -> Self {
        Self {
            name: name.into(),
            archetype,
            patches: Vec::new(),
            primitives: Vec::new(),
        }
    }

    /// Returns `true` if the mesh holds no points at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patches.iter().all(SurfacePatch::is_empty)
            && self.primitives.iter().all(|p| p.points.is_empty())
    }

    /// Patches with the given role.
    pub fn patches_with_role(&self, role: PartRole) -> impl Iterator<Item = &SurfacePatch> {
        self.patches.iter().filter(move |p| p.role == role)
    }

    /// Primitives with the given role.
    pub fn primitives_with_role(&self, role: PartRole) -> impl Iterator<Item = &Primitive> {
        self.primitives.iter().filter(move |p| p.role == role)
    }

    /// Every point of every patch and primitive.
    pub fn points(&self) -> impl Iterator<Item = &Point3> {
        self.patches
            .iter()
            .flat_map(|p| p.points.iter().flatten())
            .chain(self.primitives.iter().flat_map(|p| p.points.iter()))
    }

    /// Bounding box of all points, or `None` for an empty mesh.
    #[must_use]
    pub fn bounding_box(&self) -> Option<Aabb> {
        Aabb::from_points(self.points())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn patch(points: Vec<Vec<Point3>>) -> SurfacePatch {
        SurfacePatch {
            name: "p".into(),
            role: PartRole::Top,
            u: vec![0.0, 1.0],
            v: vec![0.0, 1.0],
            points,
            style: DisplayStyle::opaque(ColorScale::Browns),
        }
    }

    #[test]
    fn empty_mesh_has_no_bounds() {
        let mesh = Mesh::new("empty", Archetype::Generic);
        assert!(mesh.is_empty());
        assert!(mesh.bounding_box().is_none());
    }

    #[test]
    fn bounds_cover_patches_and_primitives() {
        let mut mesh = Mesh::new("m", Archetype::Table);
        mesh.patches.push(patch(vec![
            vec![Point3::new(0.0, 0.0, 1.0), Point3::new(2.0, 0.0, 1.0)],
            vec![Point3::new(0.0, 3.0, 1.0), Point3::new(2.0, 3.0, 1.0)],
        ]));
        mesh.primitives.push(Primitive {
            name: "leg".into(),
            role: PartRole::Leg,
            kind: PrimitiveKind::Lines,
            points: vec![Point3::new(-1.0, 0.0, 0.0), Point3::new(-1.0, 0.0, 1.0)],
            style: DisplayStyle::opaque(ColorScale::Browns),
        });
        let bb = mesh.bounding_box().unwrap();
        assert_eq!(bb.min, Point3::new(-1.0, 0.0, 0.0));
        assert_eq!(bb.max, Point3::new(2.0, 3.0, 1.0));
        assert_eq!(mesh.primitives_with_role(PartRole::Leg).count(), 1);
        assert_eq!(mesh.patches_with_role(PartRole::Top).count(), 1);
    }

    #[test]
    fn component_grids_follow_rows() {
        let p = patch(vec![
            vec![Point3::new(0.0, 0.0, 5.0), Point3::new(1.0, 0.0, 6.0)],
            vec![Point3::new(0.0, 1.0, 7.0), Point3::new(1.0, 1.0, 8.0)],
        ]);
        assert_eq!(p.shape(), (2, 2));
        assert_eq!(p.z_grid(), vec![vec![5.0, 6.0], vec![7.0, 8.0]]);
        assert_eq!(p.x_grid(), vec![vec![0.0, 1.0], vec![0.0, 1.0]]);
        assert_eq!(p.y_grid()[1], vec![1.0, 1.0]);
    }

    #[test]
    fn style_clamps_opacity() {
        assert!((DisplayStyle::new(ColorScale::Blues, 2.0).opacity - 1.0).abs() < f64::EPSILON);
        assert!(DisplayStyle::new(ColorScale::Blues, -1.0).opacity > 0.0);
        let nan = DisplayStyle::new(ColorScale::Blues, f64::NAN);
        assert!((nan.opacity - 1.0).abs() < f64::EPSILON);
        assert_eq!(ColorScale::Viridis.name(), "Viridis");
    }
}
