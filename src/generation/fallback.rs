use crate::geometry::Sphere;
use crate::mesh::{sample_grid, ColorScale, DisplayStyle, Mesh, PartRole};

use super::GenerationParams;

/// A unit sphere stands in for pieces without a dedicated shape.
pub(super) fn build(mesh: &mut Mesh, params: &GenerationParams) {
    let n = params.resolution();
    mesh.patches.push(sample_grid(
        &Sphere::unit(),
        n,
        n,
        "shell",
        PartRole::Shell,
        DisplayStyle::opaque(ColorScale::Blues),
    ));
}
