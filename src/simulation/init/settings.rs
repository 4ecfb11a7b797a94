use crate::domain::config::FluidConfig;

use super::perf_stats::FluidPerfStats;
use super::FluidCore;

pub(super) fn config(core: &FluidCore) -> FluidConfig {
    FluidConfig {
        size: core.grid.n(),
        diffusion: core.diffusion,
        viscosity: core.viscosity,
        dt: core.dt,
        iterations: core.iterations,
    }
}

pub(super) fn enable_perf_metrics(core: &mut FluidCore, enabled: bool) {
    core.perf_enabled = enabled;
    if !enabled {
        core.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(core: &FluidCore) -> FluidPerfStats {
    core.perf_stats.clone()
}
