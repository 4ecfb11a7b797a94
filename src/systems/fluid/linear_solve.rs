use crate::core::field::Field;
use crate::core::grid::Grid;
use crate::domain::boundary::BoundaryKind;

use super::boundary::set_boundary;
use super::perf::count_relax_sweep;

/// Gauss-Seidel relaxation of `x = (x0 + a * Σ neighbours(x)) / c`.
///
/// Runs exactly `iterations` sweeps; there is no convergence test. Each
/// cell reads neighbours already updated earlier in the same sweep, and the
/// boundary pass runs after every sweep so the next one sees fresh ghosts.
///
/// Sweep order is `i` outer, `j` inner, so `(i-1, j)` and `(i, j-1)` are
/// already updated when `(i, j)` is relaxed. Any order that breaks that
/// (reversed sweeps, Jacobi) changes the output.
pub fn linear_solve(
    grid: &Grid,
    kind: BoundaryKind,
    x: &mut Field,
    x0: &Field,
    a: f32,
    c: f32,
    iterations: u32,
) {
    let n = grid.n();
    let stride = grid.stride();

    for _ in 0..iterations {
        for i in 1..=n {
            for j in 1..=n {
                let idx = grid.index(i, j);
                let neighbours = *fast!(x, [idx - 1])
                    + *fast!(x, [idx + 1])
                    + *fast!(x, [idx - stride])
                    + *fast!(x, [idx + stride]);
                let value = (*fast!(x0, [idx]) + a * neighbours) / c;
                fast!(x, [idx] = value);
            }
        }
        set_boundary(grid, kind, x);
        count_relax_sweep();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_coupling_copies_source_scaled_by_c() {
        let grid = Grid::new(3).unwrap();
        let mut x0 = Field::zeroed(&grid);
        x0[grid.index(2, 2)] = 8.0;
        let mut x = Field::zeroed(&grid);

        linear_solve(&grid, BoundaryKind::Scalar, &mut x, &x0, 0.0, 2.0, 1);

        assert_eq!(x[grid.index(2, 2)], 4.0);
        assert_eq!(x[grid.index(1, 2)], 0.0);
    }

    #[test]
    fn later_cells_see_values_from_the_same_sweep() {
        // Jacobi would leave (1, 2) at zero after one sweep; Gauss-Seidel
        // reaches it through (1, 1), which is updated first.
        let grid = Grid::new(2).unwrap();
        let mut x0 = Field::zeroed(&grid);
        x0[grid.index(1, 1)] = 4.0;
        let mut x = Field::zeroed(&grid);

        linear_solve(&grid, BoundaryKind::Scalar, &mut x, &x0, 1.0, 4.0, 1);

        assert_eq!(x[grid.index(1, 1)], 1.0);
        assert_eq!(x[grid.index(1, 2)], 0.25);
    }

    #[test]
    fn zero_iterations_leave_target_alone() {
        let grid = Grid::new(3).unwrap();
        let mut x0 = Field::zeroed(&grid);
        x0.fill(1.0);
        let mut x = Field::zeroed(&grid);

        linear_solve(&grid, BoundaryKind::Scalar, &mut x, &x0, 1.0, 4.0, 0);

        assert!(x.iter().all(|v| *v == 0.0));
    }
}
