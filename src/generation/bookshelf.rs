use crate::catalog::Dimensions;
use crate::geometry::Slab;
use crate::math::linspace;
use crate::mesh::{sample_grid, ColorScale, DisplayStyle, Mesh, PartRole};

use super::GenerationParams;

pub(super) fn build(mesh: &mut Mesh, dims: &Dimensions, params: &GenerationParams) {
    let n = params.resolution();
    let Dimensions {
        width,
        depth,
        height,
    } = *dims;
    let panel = DisplayStyle::opaque(ColorScale::Browns);

    for (name, x) in [("left side", -width / 2.0), ("right side", width / 2.0)] {
        let side = Slab::facing_side(x, depth, 0.0, height);
        mesh.patches.push(sample_grid(&side, n, n, name, PartRole::SidePanel, panel));
    }

    let back = Slab::facing_front(depth / 2.0, width, 0.0, height);
    mesh.patches.push(sample_grid(&back, n, n, "back", PartRole::BackPanel, panel));

    let shelf_style = DisplayStyle::new(ColorScale::Cividis, 0.95);
    for (i, z) in linspace(0.0, height, params.shelf_count()).into_iter().enumerate() {
        let shelf = Slab::horizontal(0.0, 0.0, width, depth, z);
        mesh.patches.push(sample_grid(
            &shelf,
            n,
            n,
            format!("shelf {}", i + 1),
            PartRole::Shelf,
            shelf_style,
        ));
    }
}
