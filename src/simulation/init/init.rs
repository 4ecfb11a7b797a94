use crate::core::error::FluidResult;
use crate::core::field::Field;
use crate::core::grid::Grid;
use crate::domain::config::FluidConfig;

use super::perf_stats::FluidPerfStats;
use super::FluidCore;

pub(super) fn create_fluid_core(config: &FluidConfig) -> FluidResult<FluidCore> {
    let grid = Grid::new(config.size)?;

    Ok(FluidCore {
        grid,
        diffusion: config.diffusion,
        viscosity: config.viscosity,
        dt: config.dt,
        iterations: config.iterations,

        density: Field::zeroed(&grid),
        density_prev: Field::zeroed(&grid),
        velocity_x: Field::zeroed(&grid),
        velocity_y: Field::zeroed(&grid),
        velocity_x_prev: Field::zeroed(&grid),
        velocity_y_prev: Field::zeroed(&grid),

        frame: 0,

        // Start empty; the extract_* calls size these on first use.
        heightmap_buffer: Vec::new(),
        interior_buffer: Vec::new(),

        perf_enabled: false,
        perf_stats: FluidPerfStats::default(),
    })
}
