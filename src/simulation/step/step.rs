use crate::domain::boundary::BoundaryKind;
use crate::systems::fluid::{
    advect, diffuse, project, reset_solver_counters, take_solver_counters,
};

use super::{FluidCore, PerfTimer};

/// One solver step. The stage order is part of the model: swapping any two
/// stages changes the simulated flow.
pub(super) fn step(core: &mut FluidCore) {
    let perf_on = core.perf_enabled;
    if perf_on {
        core.perf_stats.reset();
        reset_solver_counters();
    }
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    // === VELOCITY ===
    let mut diffuse_ms = timed(core, perf_on, diffuse_velocity);
    let mut project_ms = timed(core, perf_on, project_diffused_velocity);
    let mut advect_ms = timed(core, perf_on, advect_velocity);
    project_ms += timed(core, perf_on, project_velocity);

    // === DENSITY ===
    diffuse_ms += timed(core, perf_on, diffuse_density);
    advect_ms += timed(core, perf_on, advect_density);

    core.frame += 1;

    if perf_on {
        let counters = take_solver_counters();
        let total_density = core.total_density();
        let max_speed = core.max_speed();
        let grid_size = core.grid.size();
        // six f32 fields
        let memory_bytes = grid_size.saturating_mul(6 * std::mem::size_of::<f32>());
        let frame = core.frame;

        let stats = &mut core.perf_stats;
        stats.diffuse_ms = diffuse_ms;
        stats.project_ms = project_ms;
        stats.advect_ms = advect_ms;
        stats.relax_sweeps = saturating_u32(counters.relax_sweeps);
        stats.boundary_passes = saturating_u32(counters.boundary_passes);
        stats.grid_size = saturating_u32(grid_size);
        stats.memory_bytes = saturating_u32(memory_bytes);
        stats.frame = frame;
        stats.total_density = total_density;
        stats.max_speed = max_speed;
        if let Some(start) = step_start {
            stats.step_ms = start.elapsed_ms();
        }
    }
}

/// Perf counters are `u32` on the JS side; oversized values read as `u32::MAX`
pub(super) fn saturating_u32<T: TryInto<u32>>(value: T) -> u32 {
    value.try_into().unwrap_or(u32::MAX)
}

fn timed(core: &mut FluidCore, perf_on: bool, stage: fn(&mut FluidCore)) -> f64 {
    if perf_on {
        let t0 = PerfTimer::start();
        stage(core);
        t0.elapsed_ms()
    } else {
        stage(core);
        0.0
    }
}

/// velocity → velocity_prev, with viscosity
fn diffuse_velocity(core: &mut FluidCore) {
    let FluidCore {
        grid, velocity_x, velocity_y, velocity_x_prev, velocity_y_prev,
        viscosity, dt, iterations, ..
    } = core;

    diffuse(grid, BoundaryKind::VelocityX, velocity_x_prev, velocity_x, *viscosity, *dt, *iterations);
    diffuse(grid, BoundaryKind::VelocityY, velocity_y_prev, velocity_y, *viscosity, *dt, *iterations);
}

/// Project velocity_prev, using velocity as pressure / divergence scratch
fn project_diffused_velocity(core: &mut FluidCore) {
    let FluidCore {
        grid, velocity_x, velocity_y, velocity_x_prev, velocity_y_prev, iterations, ..
    } = core;

    project(grid, velocity_x_prev, velocity_y_prev, velocity_x, velocity_y, *iterations);
}

/// Self-advection: velocity_prev carries itself into velocity
fn advect_velocity(core: &mut FluidCore) {
    let FluidCore {
        grid, velocity_x, velocity_y, velocity_x_prev, velocity_y_prev, dt, ..
    } = core;
    let (flow_x, flow_y) = (&*velocity_x_prev, &*velocity_y_prev);

    advect(grid, BoundaryKind::VelocityX, velocity_x, flow_x, flow_x, flow_y, *dt);
    advect(grid, BoundaryKind::VelocityY, velocity_y, flow_y, flow_x, flow_y, *dt);
}

/// Final projection, velocity_prev now the scratch pair
fn project_velocity(core: &mut FluidCore) {
    let FluidCore {
        grid, velocity_x, velocity_y, velocity_x_prev, velocity_y_prev, iterations, ..
    } = core;

    project(grid, velocity_x, velocity_y, velocity_x_prev, velocity_y_prev, *iterations);
}

/// density → density_prev
fn diffuse_density(core: &mut FluidCore) {
    let FluidCore { grid, density, density_prev, diffusion, dt, iterations, .. } = core;

    diffuse(grid, BoundaryKind::Scalar, density_prev, density, *diffusion, *dt, *iterations);
}

/// density_prev → density along the projected velocity
fn advect_density(core: &mut FluidCore) {
    let FluidCore { grid, density, density_prev, velocity_x, velocity_y, dt, .. } = core;

    advect(grid, BoundaryKind::Scalar, density, density_prev, velocity_x, velocity_y, *dt);
}
