use crate::catalog::Dimensions;
use crate::geometry::{Bump, Slab};
use crate::mesh::{sample_grid, ColorScale, DisplayStyle, Mesh, PartRole};

use super::GenerationParams;

const BASE_LEVEL: f64 = 0.25;
const SEAT_LEVEL: f64 = 0.5;
/// Share of the depth covered by the seat cushions, from the front edge.
const SEAT_DEPTH: f64 = 0.8;
/// Backrest offset in from the rear edge, as a share of the depth.
const BACKREST_INSET: f64 = 0.1;
/// Cushion crown height, as a share of the overall height.
const CUSHION_RISE: f64 = 0.06;

pub(super) fn build(mesh: &mut Mesh, dims: &Dimensions, params: &GenerationParams) {
    let n = params.resolution();
    let Dimensions {
        width,
        depth,
        height,
    } = *dims;

    let base = Slab::horizontal(0.0, 0.0, width, depth, height * BASE_LEVEL);
    mesh.patches.push(sample_grid(
        &base,
        n,
        n,
        "base",
        PartRole::Base,
        DisplayStyle::opaque(ColorScale::Browns),
    ));

    let seat_depth = depth * SEAT_DEPTH;
    let mut seat = Slab::horizontal(
        0.0,
        -depth / 2.0 + seat_depth / 2.0,
        width,
        seat_depth,
        height * SEAT_LEVEL,
    );
    for bump in cushion_bumps(params.cushion_count(), height * CUSHION_RISE) {
        seat = seat.with_bump(bump);
    }
    mesh.patches.push(sample_grid(
        &seat,
        n,
        n,
        "cushions",
        PartRole::Cushion,
        DisplayStyle::opaque(ColorScale::Viridis),
    ));

    let backrest = Slab::facing_front(
        depth / 2.0 - depth * BACKREST_INSET,
        width,
        height * SEAT_LEVEL,
        height,
    );
    mesh.patches.push(sample_grid(
        &backrest,
        n,
        n,
        "backrest",
        PartRole::Backrest,
        DisplayStyle::new(ColorScale::Viridis, 0.9),
    ));
}

/// One bump per cushion, centered on evenly spaced points along the width.
#[allow(clippy::cast_precision_loss)]
fn cushion_bumps(count: usize, amplitude: f64) -> impl Iterator<Item = Bump> {
    let count_f = count as f64;
    (0..count).map(move |i| Bump {
        center_u: (i as f64 + 0.5) / count_f,
        center_v: 0.5,
        sigma_u: 0.35 / count_f,
        sigma_v: 0.35,
        amplitude,
    })
}
