use crate::geometry::Surface;
use crate::math::linspace;

use super::{DisplayStyle, PartRole, SurfacePatch};

/// Samples `surface` on an `n_u x n_v` grid spanning its whole domain,
/// edges included.
#[must_use]
pub fn sample_grid(
    surface: &dyn Surface,
    n_u: usize,
    n_v: usize,
    name: impl Into<String>,
    role: PartRole,
    style: DisplayStyle,
) -> SurfacePatch {
    let domain = surface.domain();
    let u = linspace(domain.u_min, domain.u_max, n_u);
    let v = linspace(domain.v_min, domain.v_max, n_v);
    let points = v
        .iter()
        .map(|&vj| u.iter().map(|&ui| surface.evaluate(ui, vj)).collect())
        .collect();
    SurfacePatch {
        name: name.into(),
        role,
        u,
        v,
        points,
        style,
    }
}
