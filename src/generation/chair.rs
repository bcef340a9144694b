use crate::catalog::Dimensions;
use crate::geometry::{Bump, Slab};
use crate::math::Point3;
use crate::mesh::{sample_grid, ColorScale, DisplayStyle, Mesh, PartRole, Primitive, PrimitiveKind};

use super::GenerationParams;

const SEAT_LEVEL: f64 = 0.55;
/// Dimple depth, as a share of the overall height.
const DIMPLE_DEPTH: f64 = 0.02;
const DIMPLE_SPREAD: f64 = 0.2;

pub(super) fn build(mesh: &mut Mesh, dims: &Dimensions, params: &GenerationParams) {
    let n = params.resolution();
    let Dimensions {
        width,
        depth,
        height,
    } = *dims;
    let seat_z = height * SEAT_LEVEL;
    let style = DisplayStyle::opaque(ColorScale::Browns);

    let seat = Slab::horizontal(0.0, 0.0, width, depth, seat_z).with_bump(Bump {
        center_u: 0.5,
        center_v: 0.5,
        sigma_u: DIMPLE_SPREAD,
        sigma_v: DIMPLE_SPREAD,
        amplitude: -height * DIMPLE_DEPTH,
    });
    mesh.patches.push(sample_grid(&seat, n, n, "seat", PartRole::Seat, style));

    let backrest = Slab::facing_front(depth / 2.0, width, seat_z, height);
    mesh.patches.push(sample_grid(&backrest, n, n, "backrest", PartRole::Backrest, style));

    let leg_style = DisplayStyle::opaque(ColorScale::Greys);
    let (hx, hy) = (width / 2.0, depth / 2.0);
    for (i, (x, y)) in [(-hx, -hy), (hx, -hy), (-hx, hy), (hx, hy)].into_iter().enumerate() {
        mesh.primitives.push(Primitive {
            name: format!("leg {}", i + 1),
            role: PartRole::Leg,
            kind: PrimitiveKind::Lines,
            points: vec![Point3::new(x, y, seat_z), Point3::new(x, y, 0.0)],
            style: leg_style,
        });
    }
}
