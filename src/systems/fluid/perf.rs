use std::cell::Cell;

thread_local! {
    static RELAX_SWEEPS: Cell<u64> = Cell::new(0);
    static BOUNDARY_PASSES: Cell<u64> = Cell::new(0);
}

/// Work done by the solver passes since the last reset
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SolverCounters {
    pub relax_sweeps: u64,
    pub boundary_passes: u64,
}

#[inline]
pub(super) fn count_relax_sweep() {
    RELAX_SWEEPS.with(|c| c.set(c.get() + 1));
}

#[inline]
pub(super) fn count_boundary_pass() {
    BOUNDARY_PASSES.with(|c| c.set(c.get() + 1));
}

pub fn reset_solver_counters() {
    RELAX_SWEEPS.with(|c| c.set(0));
    BOUNDARY_PASSES.with(|c| c.set(0));
}

pub fn take_solver_counters() -> SolverCounters {
    SolverCounters {
        relax_sweeps: RELAX_SWEEPS.with(|c| c.replace(0)),
        boundary_passes: BOUNDARY_PASSES.with(|c| c.replace(0)),
    }
}
