use crate::core::field::Field;
use crate::core::grid::Grid;
use crate::domain::boundary::BoundaryKind;

use super::perf::count_boundary_pass;

#[inline(always)]
fn mirror(value: f32, flip: bool) -> f32 {
    if flip { -value } else { value }
}

/// Fill the ghost layer of `field` from its interior neighbours.
///
/// Edges normal to a velocity component get the negated value, every other
/// edge gets a plain copy. Corners take the mean of their two edge ghosts,
/// so they are written last.
pub fn set_boundary(grid: &Grid, kind: BoundaryKind, field: &mut Field) {
    let n = grid.n();
    let flip_x = kind.mirrors_x();
    let flip_y = kind.mirrors_y();

    for k in 1..=n {
        // Left / right walls
        let left = *fast!(field, [grid.index(1, k)]);
        let right = *fast!(field, [grid.index(n, k)]);
        fast!(field, [grid.index(0, k)] = mirror(left, flip_x));
        fast!(field, [grid.index(n + 1, k)] = mirror(right, flip_x));

        // Top / bottom walls
        let top = *fast!(field, [grid.index(k, 1)]);
        let bottom = *fast!(field, [grid.index(k, n)]);
        fast!(field, [grid.index(k, 0)] = mirror(top, flip_y));
        fast!(field, [grid.index(k, n + 1)] = mirror(bottom, flip_y));
    }

    // (corner, neighbour along x, neighbour along y)
    let corners = [
        ((0, 0), (1, 0), (0, 1)),
        ((0, n + 1), (1, n + 1), (0, n)),
        ((n + 1, 0), (n, 0), (n + 1, 1)),
        ((n + 1, n + 1), (n, n + 1), (n + 1, n)),
    ];
    for ((ci, cj), (ai, aj), (bi, bj)) in corners {
        let avg = 0.5 * (field[grid.index(ai, aj)] + field[grid.index(bi, bj)]);
        field[grid.index(ci, cj)] = avg;
    }

    count_boundary_pass();
}
