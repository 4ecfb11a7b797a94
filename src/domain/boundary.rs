//! Boundary kinds for the ghost-cell pass

/// What the boundary pass is filling ghost cells for.
///
/// Velocity components flip sign across the walls they are normal to, so
/// nothing flows through the box edges. Scalars (density, pressure,
/// divergence) are copied unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundaryKind {
    Scalar,
    VelocityX,
    VelocityY,
}

impl BoundaryKind {
    /// Negate across the left/right walls
    #[inline]
    pub fn mirrors_x(self) -> bool {
        matches!(self, BoundaryKind::VelocityX)
    }

    /// Negate across the top/bottom walls
    #[inline]
    pub fn mirrors_y(self) -> bool {
        matches!(self, BoundaryKind::VelocityY)
    }
}
