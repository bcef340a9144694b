use crate::catalog::Dimensions;
use crate::geometry::{Cylinder, Slab};
use crate::math::{linspace, Point3};
use crate::mesh::{sample_grid, ColorScale, DisplayStyle, Mesh, PartRole, Primitive, PrimitiveKind};

use super::GenerationParams;

/// Leg inset from the edges, as a share of width (x) and depth (y).
const LEG_INSET: f64 = 0.1;
/// Leg radius, as a share of the smaller footprint side.
const LEG_RADIUS: f64 = 0.03;

pub(super) fn build(mesh: &mut Mesh, dims: &Dimensions, params: &GenerationParams) {
    let n = params.resolution();
    let Dimensions {
        width,
        depth,
        height,
    } = *dims;
    let style = DisplayStyle::opaque(ColorScale::Browns);

    let top = Slab::horizontal(0.0, 0.0, width, depth, height);
    mesh.patches.push(sample_grid(&top, n, n, "top", PartRole::Top, style));

    let leg_x = width / 2.0 - width * LEG_INSET;
    let leg_y = depth / 2.0 - depth * LEG_INSET;
    let radius = width.min(depth) * LEG_RADIUS;
    let levels = linspace(0.0, height, params.leg_ring_count());

    for (i, (sx, sy)) in [(-1.0, -1.0), (1.0, -1.0), (-1.0, 1.0), (1.0, 1.0)]
        .into_iter()
        .enumerate()
    {
        let leg = Cylinder::clamped(Point3::new(sx * leg_x, sy * leg_y, 0.0), radius, height);
        let points = levels
            .iter()
            .flat_map(|&z| leg.ring(z, params.ring_segments()))
            .collect();
        mesh.primitives.push(Primitive {
            name: format!("leg {}", i + 1),
            role: PartRole::Leg,
            kind: PrimitiveKind::Markers,
            points,
            style,
        });
    }
}
