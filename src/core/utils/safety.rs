//! Zero-cost indexing for solver sweeps
//!
//! Debug builds index normally, so an off-by-one in a stencil panics with the
//! offending index. Release builds use `get_unchecked`: every call site reads
//! or writes a padded `(N+2)²` field at coordinates in `[0, N+1]`, which the
//! interior loops and the advection clamp guarantee.
//!
//! Usage:
//! ```rust
//! use stable_fluid_engine::fast;
//!
//! let stride = 4; // N = 2
//! let mut density = vec![0.0f32; stride * stride];
//! let center = 1 + stride;
//!
//! // Write: fast!(slice, [index] = value)
//! fast!(density, [center] = 2.5);
//! // Read: fast!(slice, [index])
//! let left = *fast!(density, [center - 1]);
//! assert_eq!(left, 0.0);
//! assert_eq!(*fast!(density, [center]), 2.5);
//! ```

/// Stencil indexing: checked in debug, unchecked in release.
#[macro_export]
macro_rules! fast {
    ($slice:expr, [$index:expr]) => {{
        #[cfg(debug_assertions)]
        {
            &$slice[$index]
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { $slice.get_unchecked($index) }
        }
    }};

    ($slice:expr, [$index:expr] = $val:expr) => {{
        #[cfg(debug_assertions)]
        {
            $slice[$index] = $val;
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { *$slice.get_unchecked_mut($index) = $val; }
        }
    }};
}

#[cfg(test)]
mod tests {
    use crate::core::field::Field;
    use crate::core::grid::Grid;

    #[test]
    fn fast_reads_through_field_deref() {
        let grid = Grid::new(2).unwrap();
        let mut field = Field::zeroed(&grid);
        field[grid.index(2, 1)] = 7.0;
        assert_eq!(*fast!(field, [grid.index(2, 1)]), 7.0);
    }

    #[test]
    fn fast_writes_single_cell() {
        let grid = Grid::new(3).unwrap();
        let mut field = Field::zeroed(&grid);
        let idx = grid.index(1, 3);
        fast!(field, [idx] = -1.5);
        assert_eq!(field[idx], -1.5);
        assert_eq!(field.iter().filter(|v| **v != 0.0).count(), 1);
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn fast_past_padding_panics_in_debug() {
        let grid = Grid::new(2).unwrap();
        let field = Field::zeroed(&grid);
        let _ = *fast!(field, [grid.size()]);
    }
}
