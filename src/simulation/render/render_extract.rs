use crate::domain::fields::FieldKind;

use super::FluidCore;

pub(super) fn total_density(core: &FluidCore) -> f32 {
    let grid = &core.grid;
    let n = grid.n();
    let mut sum = 0.0f32;
    for j in 1..=n {
        let row = grid.index(1, j);
        sum += core.density[row..row + n].iter().sum::<f32>();
    }
    sum
}

pub(super) fn max_speed(core: &FluidCore) -> f32 {
    let grid = &core.grid;
    let n = grid.n();
    let mut max_sq = 0.0f32;
    for j in 1..=n {
        for i in 1..=n {
            let idx = grid.index(i, j);
            let (vx, vy) = (core.velocity_x[idx], core.velocity_y[idx]);
            max_sq = max_sq.max(vx * vx + vy * vy);
        }
    }
    max_sq.sqrt()
}

/// Vertex `(i, j)` of an `(N+1)²` plane mesh reads `density[i, j]`, so the
/// mesh covers one ghost row/column at the low edges and stops at `N` at the
/// high edges.
pub(super) fn extract_density_heightmap(core: &mut FluidCore, scale: f32) -> *const f32 {
    let grid = core.grid;
    let verts = grid.n() + 1;
    let needed = verts * verts;
    if core.heightmap_buffer.len() != needed {
        core.heightmap_buffer.resize(needed, 0.0);
    }

    for j in 0..verts {
        let src = grid.index(0, j);
        let dst = j * verts;
        for (out, value) in core.heightmap_buffer[dst..dst + verts]
            .iter_mut()
            .zip(&core.density[src..src + verts])
        {
            *out = value * scale;
        }
    }

    core.heightmap_buffer.as_ptr()
}

/// Copy the interior of `kind` row by row, `N` values per row, no padding
pub(super) fn extract_interior(core: &mut FluidCore, kind: FieldKind) -> *const f32 {
    let grid = core.grid;
    let n = grid.n();
    let needed = n * n;
    if core.interior_buffer.len() != needed {
        core.interior_buffer.resize(needed, 0.0);
    }

    let source = match kind {
        FieldKind::Density => &core.density,
        FieldKind::VelocityX => &core.velocity_x,
        FieldKind::VelocityY => &core.velocity_y,
    };

    for j in 1..=n {
        let src = grid.index(1, j);
        let dst = (j - 1) * n;
        core.interior_buffer[dst..dst + n].copy_from_slice(&source[src..src + n]);
    }

    core.interior_buffer.as_ptr()
}
