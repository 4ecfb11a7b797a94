//! Grid - padded geometry shared by every field of a solver
//!
//! A resolution-`N` grid stores `(N+2)²` cells. Index `0` and `N+1` on each
//! axis are ghost cells written only by the boundary pass; `1..=N` are the
//! simulated interior. Cell `(i, j)` lives at `i + (N+2) * j`.

use crate::core::error::{FluidError, FluidResult};

mod indexing;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    n: usize,
    stride: usize,
    size: usize,
}

impl Grid {
    pub fn new(n: usize) -> FluidResult<Self> {
        if n == 0 {
            return Err(FluidError::InvalidResolution { size: 0 });
        }

        let too_large = || FluidError::GridTooLarge { size: n };
        let stride = n.checked_add(2).ok_or_else(too_large)?;
        let size = stride.checked_mul(stride).ok_or_else(too_large)?;

        // Vec<f32> caps at isize::MAX bytes
        let bytes = size
            .checked_mul(std::mem::size_of::<f32>())
            .ok_or_else(too_large)?;
        if bytes > isize::MAX as usize {
            return Err(too_large());
        }

        Ok(Self { n, stride, size })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_resolution_is_rejected() {
        assert!(matches!(
            Grid::new(0),
            Err(FluidError::InvalidResolution { size: 0 })
        ));
    }

    #[test]
    fn huge_resolution_is_rejected() {
        assert!(matches!(
            Grid::new(usize::MAX),
            Err(FluidError::GridTooLarge { .. })
        ));
        assert!(matches!(
            Grid::new(usize::MAX / 2),
            Err(FluidError::GridTooLarge { .. })
        ));
    }

    #[test]
    fn storage_is_padded_by_one_ghost_layer() {
        let grid = Grid::new(4).unwrap();
        assert_eq!(grid.n(), 4);
        assert_eq!(grid.stride(), 6);
        assert_eq!(grid.size(), 36);
    }

    #[test]
    fn linear_index_is_column_plus_stride_times_row() {
        let grid = Grid::new(4).unwrap();
        assert_eq!(grid.index(0, 0), 0);
        assert_eq!(grid.index(5, 0), 5);
        assert_eq!(grid.index(0, 1), 6);
        assert_eq!(grid.index(2, 3), 2 + 6 * 3);
        assert_eq!(grid.coords(grid.index(3, 5)), (3, 5));
    }

    #[test]
    fn interior_excludes_ghost_cells() {
        let grid = Grid::new(4).unwrap();
        assert!(grid.is_interior(1, 1));
        assert!(grid.is_interior(4, 4));
        assert!(!grid.is_interior(0, 2));
        assert!(!grid.is_interior(2, 5));
        assert!(grid.in_storage(5, 5));
        assert!(!grid.in_storage(6, 0));
    }
}
