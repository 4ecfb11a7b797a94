use crate::core::error::{FluidError, FluidResult};
use crate::core::grid::Grid;

use super::FluidCore;

fn check_interior(grid: &Grid, x: usize, y: usize) -> FluidResult<()> {
    if grid.is_interior(x, y) {
        Ok(())
    } else {
        Err(FluidError::OutOfInterior { x, y, size: grid.n() })
    }
}

pub(super) fn add_density(core: &mut FluidCore, x: usize, y: usize, amount: f32) -> bool {
    if !core.grid.in_storage(x, y) {
        return false;
    }

    let idx = core.grid.index(x, y);
    core.density[idx] += amount;
    true
}

pub(super) fn add_velocity(core: &mut FluidCore, x: usize, y: usize, dx: f32, dy: f32) -> bool {
    if !core.grid.in_storage(x, y) {
        return false;
    }

    let idx = core.grid.index(x, y);
    core.velocity_x[idx] += dx;
    core.velocity_y[idx] += dy;
    true
}

pub(super) fn try_add_density(core: &mut FluidCore, x: usize, y: usize, amount: f32) -> FluidResult<()> {
    check_interior(&core.grid, x, y)?;
    add_density(core, x, y, amount);
    Ok(())
}

pub(super) fn try_add_velocity(core: &mut FluidCore, x: usize, y: usize, dx: f32, dy: f32) -> FluidResult<()> {
    check_interior(&core.grid, x, y)?;
    add_velocity(core, x, y, dx, dy);
    Ok(())
}

/// Interior cells within `radius` of `(cx, cy)`, row by row.
/// Only the part of the brush square that overlaps `1..=N` is visited; a
/// negative radius visits nothing.
fn brush_cells(grid: &Grid, cx: i32, cy: i32, radius: i32) -> impl Iterator<Item = (usize, usize)> {
    let n = grid.n() as i64;
    let (cx, cy, r) = (cx as i64, cy as i64, radius as i64);
    let r2 = r * r;

    let (x_lo, x_hi) = ((cx - r).max(1), (cx + r).min(n));
    let (y_lo, y_hi) = ((cy - r).max(1), (cy + r).min(n));

    (y_lo..=y_hi)
        .flat_map(move |y| (x_lo..=x_hi).map(move |x| (x, y)))
        .filter(move |(x, y)| {
            let (dx, dy) = (x - cx, y - cy);
            dx * dx + dy * dy <= r2
        })
        .map(|(x, y)| (x as usize, y as usize))
}

pub(super) fn add_density_in_radius(core: &mut FluidCore, cx: i32, cy: i32, radius: i32, amount: f32) {
    for (x, y) in brush_cells(&core.grid, cx, cy, radius) {
        add_density(core, x, y, amount);
    }
}

pub(super) fn add_velocity_in_radius(core: &mut FluidCore, cx: i32, cy: i32, radius: i32, dx: f32, dy: f32) {
    for (x, y) in brush_cells(&core.grid, cx, cy, radius) {
        add_velocity(core, x, y, dx, dy);
    }
}

pub(super) fn clear(core: &mut FluidCore) {
    core.density.fill(0.0);
    core.density_prev.fill(0.0);
    core.velocity_x.fill(0.0);
    core.velocity_y.fill(0.0);
    core.velocity_x_prev.fill(0.0);
    core.velocity_y_prev.fill(0.0);
    core.frame = 0;
    core.perf_stats.reset();
}
