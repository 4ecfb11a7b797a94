use super::*;

impl Grid {
    // === Dimensions ===
    /// Interior cells per axis
    #[inline]
    pub fn n(&self) -> usize { self.n }

    /// Cells per stored row, `N + 2`
    #[inline]
    pub fn stride(&self) -> usize { self.stride }

    /// Total stored cells, `(N + 2)²`
    #[inline]
    pub fn size(&self) -> usize { self.size }

    // === Index conversion ===
    #[inline]
    pub fn index(&self, i: usize, j: usize) -> usize {
        i + self.stride * j
    }

    #[inline]
    pub fn coords(&self, idx: usize) -> (usize, usize) {
        (idx % self.stride, idx / self.stride)
    }

    // === Bounds checking ===
    /// Inside the padded buffer, ghost cells included
    #[inline]
    pub fn in_storage(&self, i: usize, j: usize) -> bool {
        i < self.stride && j < self.stride
    }

    #[inline]
    pub fn is_interior(&self, i: usize, j: usize) -> bool {
        (1..=self.n).contains(&i) && (1..=self.n).contains(&j)
    }
}
