use crate::core::field::Field;
use crate::core::grid::Grid;
use crate::domain::boundary::BoundaryKind;

use super::boundary::set_boundary;
use super::linear_solve::linear_solve;

/// Negative, N-scaled central-difference divergence at `idx`
#[inline(always)]
fn divergence_at(vel_x: &Field, vel_y: &Field, idx: usize, stride: usize, nf: f32) -> f32 {
    -0.5 * (*fast!(vel_x, [idx + 1]) - *fast!(vel_x, [idx - 1])
        + *fast!(vel_y, [idx + stride]) - *fast!(vel_y, [idx - stride]))
        / nf
}

/// Make `(vel_x, vel_y)` approximately divergence-free.
///
/// `pressure` and `divergence` are scratch; their previous contents are
/// overwritten. The Poisson solve `Δp = div` reuses [`linear_solve`] with
/// `a = 1, c = 4`, then the pressure gradient is subtracted from the
/// velocity and the velocity ghosts are refreshed.
pub fn project(
    grid: &Grid,
    vel_x: &mut Field,
    vel_y: &mut Field,
    pressure: &mut Field,
    divergence: &mut Field,
    iterations: u32,
) {
    let n = grid.n();
    let nf = n as f32;
    let stride = grid.stride();

    for i in 1..=n {
        for j in 1..=n {
            let idx = grid.index(i, j);
            let div = divergence_at(vel_x, vel_y, idx, stride, nf);
            fast!(divergence, [idx] = div);
            fast!(pressure, [idx] = 0.0);
        }
    }
    set_boundary(grid, BoundaryKind::Scalar, divergence);
    set_boundary(grid, BoundaryKind::Scalar, pressure);

    linear_solve(grid, BoundaryKind::Scalar, pressure, divergence, 1.0, 4.0, iterations);

    for i in 1..=n {
        for j in 1..=n {
            let idx = grid.index(i, j);
            let grad_x = 0.5 * (*fast!(pressure, [idx + 1]) - *fast!(pressure, [idx - 1])) * nf;
            let grad_y = 0.5 * (*fast!(pressure, [idx + stride]) - *fast!(pressure, [idx - stride])) * nf;
            let vx = *fast!(vel_x, [idx]) - grad_x;
            let vy = *fast!(vel_y, [idx]) - grad_y;
            fast!(vel_x, [idx] = vx);
            fast!(vel_y, [idx] = vy);
        }
    }
    set_boundary(grid, BoundaryKind::VelocityX, vel_x);
    set_boundary(grid, BoundaryKind::VelocityY, vel_y);
}

/// Largest `|divergence|` over the interior, same stencil as [`project`].
/// Diagnostic only.
pub fn max_divergence(grid: &Grid, vel_x: &Field, vel_y: &Field) -> f32 {
    let n = grid.n();
    let nf = n as f32;
    let stride = grid.stride();

    let mut max_div = 0.0f32;
    for j in 1..=n {
        for i in 1..=n {
            let div = divergence_at(vel_x, vel_y, grid.index(i, j), stride, nf);
            max_div = max_div.max(div.abs());
        }
    }
    max_div
}
