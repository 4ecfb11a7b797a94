use crate::core::field::Field;
use crate::core::grid::Grid;
use crate::domain::boundary::BoundaryKind;

use super::linear_solve::linear_solve;

/// Implicit diffusion of `src` into `dst` at `rate` over `dt`.
///
/// Solves `dst - a * Δdst = src` with `a = dt * rate * N²`, which stays
/// stable however large `a` gets.
pub fn diffuse(
    grid: &Grid,
    kind: BoundaryKind,
    dst: &mut Field,
    src: &Field,
    rate: f32,
    dt: f32,
    iterations: u32,
) {
    let n = grid.n() as f32;
    let a = dt * rate * n * n;
    linear_solve(grid, kind, dst, src, a, 1.0 + 4.0 * a, iterations);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn peak(grid: &Grid, value: f32) -> Field {
        let mut field = Field::zeroed(grid);
        field[grid.index(2, 2)] = value;
        field
    }

    #[test]
    fn positive_rate_lowers_the_peak() {
        let grid = Grid::new(4).unwrap();
        let src = peak(&grid, 10.0);
        let mut dst = Field::zeroed(&grid);

        diffuse(&grid, BoundaryKind::Scalar, &mut dst, &src, 0.2, 0.1, 4);

        let max_after = dst.iter().copied().fold(f32::MIN, f32::max);
        assert!(max_after < 10.0, "peak should spread, got {}", max_after);
        // Mass reached the neighbours
        assert!(dst[grid.index(3, 2)] > 0.0);
        assert!(dst[grid.index(2, 1)] > 0.0);
    }

    #[test]
    fn zero_rate_copies_interior() {
        let grid = Grid::new(4).unwrap();
        let src = peak(&grid, 3.5);
        let mut dst = Field::zeroed(&grid);

        diffuse(&grid, BoundaryKind::Scalar, &mut dst, &src, 0.0, 0.1, 4);

        for j in 1..=grid.n() {
            for i in 1..=grid.n() {
                assert_eq!(dst[grid.index(i, j)], src[grid.index(i, j)]);
            }
        }
    }

    #[test]
    fn huge_timestep_stays_finite_and_bounded() {
        let grid = Grid::new(8).unwrap();
        let src = peak(&grid, 100.0);
        let mut dst = Field::zeroed(&grid);

        diffuse(&grid, BoundaryKind::Scalar, &mut dst, &src, 5.0, 1000.0, 4);

        assert!(dst.iter().all(|v| v.is_finite() && v.abs() <= 100.0));
    }
}
