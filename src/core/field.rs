//! Field - one padded `f32` buffer per simulated quantity
//!
//! `f32` matches the `Float32Array` views the presentation layer builds over
//! wasm memory. A field derefs to its slice so solver passes index it
//! directly with `Grid::index`.

use std::ops::{Deref, DerefMut};

use super::grid::Grid;

#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    data: Vec<f32>,
}

impl Field {
    pub fn zeroed(grid: &Grid) -> Self {
        Self { data: vec![0.0; grid.size()] }
    }

    pub fn fill(&mut self, value: f32) {
        self.data.fill(value);
    }

    /// Pointer into wasm memory (for JS `Float32Array` views)
    pub fn as_ptr(&self) -> *const f32 {
        self.data.as_ptr()
    }

    pub fn byte_len(&self) -> usize {
        self.data.len() * std::mem::size_of::<f32>()
    }
}

impl Deref for Field {
    type Target = [f32];

    #[inline]
    fn deref(&self) -> &[f32] {
        &self.data
    }
}

impl DerefMut for Field {
    #[inline]
    fn deref_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }
}
