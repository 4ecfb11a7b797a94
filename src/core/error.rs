//! Solver error type
//!
//! Only construction and the checked injection variants can fail. `step()`
//! and the unchecked injections are total.

use thiserror::Error;

pub type FluidResult<T> = Result<T, FluidError>;

#[derive(Error, Debug)]
pub enum FluidError {
    /// Resolution below 1 (including negative sizes coming from JS)
    #[error("grid resolution must be at least 1, got {size}")]
    InvalidResolution { size: i64 },

    /// `(N+2)²` cells do not fit in addressable memory
    #[error("grid resolution {size} is too large to allocate")]
    GridTooLarge { size: usize },

    /// Checked injection outside `[1, N]`
    #[error("cell ({x}, {y}) is outside the interior 1..={size}")]
    OutOfInterior { x: usize, y: usize, size: usize },

    #[error("invalid fluid config: {0}")]
    Config(#[from] serde_json::Error),
}
