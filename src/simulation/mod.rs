//! FluidCore - Stable Fluids solver state and frame driver surface
//!
//! Owns the six padded fields and the solver parameters. The JS facade in
//! `facade.rs` wraps it; everything algorithmic lives in `systems::fluid`.
//!
//! Layout:
//! - init/      - construction and runtime settings
//! - commands/  - density / velocity injection, brushes, clear
//! - step/      - the fixed-order step pipeline
//! - render/    - transfer buffers for the presentation layer
//! - perf/      - opt-in per-step timing

use crate::core::error::FluidResult;
use crate::core::field::Field;
use crate::core::grid::Grid;
use crate::domain::config::FluidConfig;
use crate::domain::fields::FieldKind;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::{AbiLayout, FluidSim};
pub use perf_stats::FluidPerfStats;

use perf_timer::PerfTimer;

pub(crate) struct AbiLayoutData {
    pub(crate) size: usize,
    pub(crate) stride: usize,
    pub(crate) density_ptr: *const f32,
    pub(crate) velocity_x_ptr: *const f32,
    pub(crate) velocity_y_ptr: *const f32,
    pub(crate) field_len_elements: usize,
    pub(crate) field_len_bytes: usize,
    pub(crate) heightmap_ptr: *const f32,
    pub(crate) heightmap_len_elements: usize,
    pub(crate) interior_ptr: *const f32,
    pub(crate) interior_len_elements: usize,
}

/// The fluid solver
pub struct FluidCore {
    grid: Grid,

    // Parameters (fixed for the lifetime of the solver)
    diffusion: f32,
    viscosity: f32,
    dt: f32,
    iterations: u32,

    // Fields. `*_prev` are diffusion targets, advection sources and
    // projection scratch, depending on the stage.
    density: Field,
    density_prev: Field,
    velocity_x: Field,
    velocity_y: Field,
    velocity_x_prev: Field,
    velocity_y_prev: Field,

    // State
    frame: u64,

    // Render transfer buffers (grown on demand)
    heightmap_buffer: Vec<f32>,
    interior_buffer: Vec<f32>,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: FluidPerfStats,
}

impl FluidCore {
    /// Create a solver with `size` interior cells per axis
    pub fn new(size: usize, diffusion: f32, viscosity: f32, dt: f32) -> FluidResult<Self> {
        Self::with_config(&FluidConfig::new(size, diffusion, viscosity, dt))
    }

    pub fn with_config(config: &FluidConfig) -> FluidResult<Self> {
        init::create_fluid_core(config)
    }

    pub fn from_config_json(json: &str) -> FluidResult<Self> {
        let config = FluidConfig::from_json(json)?;
        Self::with_config(&config)
    }

    pub fn config(&self) -> FluidConfig {
        settings::config(self)
    }

    pub fn grid(&self) -> &Grid { &self.grid }

    /// Interior cells per axis (`N`)
    pub fn size(&self) -> usize { self.grid.n() }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn diffusion(&self) -> f32 { self.diffusion }

    pub fn viscosity(&self) -> f32 { self.viscosity }

    pub fn dt(&self) -> f32 { self.dt }

    pub fn iterations(&self) -> u32 { self.iterations }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> FluidPerfStats {
        settings::get_perf_stats(self)
    }

    // === INJECTION ===

    /// Add `amount` of density at `(x, y)`.
    ///
    /// Callers should stay inside `1..=N`. Ghost coordinates are written
    /// as-is (the next boundary pass overwrites them); coordinates outside
    /// the padded buffer are ignored and return `false`.
    pub fn add_density(&mut self, x: usize, y: usize, amount: f32) -> bool {
        commands::add_density(self, x, y, amount)
    }

    /// Add `(dx, dy)` to the velocity at `(x, y)`. Same contract as [`Self::add_density`].
    pub fn add_velocity(&mut self, x: usize, y: usize, dx: f32, dy: f32) -> bool {
        commands::add_velocity(self, x, y, dx, dy)
    }

    /// Like [`Self::add_density`], but rejects anything outside the interior
    pub fn try_add_density(&mut self, x: usize, y: usize, amount: f32) -> FluidResult<()> {
        commands::try_add_density(self, x, y, amount)
    }

    pub fn try_add_velocity(&mut self, x: usize, y: usize, dx: f32, dy: f32) -> FluidResult<()> {
        commands::try_add_velocity(self, x, y, dx, dy)
    }

    /// Add density to every interior cell within `radius` of `(cx, cy)`
    pub fn add_density_in_radius(&mut self, cx: i32, cy: i32, radius: i32, amount: f32) {
        commands::add_density_in_radius(self, cx, cy, radius, amount)
    }

    /// Add velocity to every interior cell within `radius` of `(cx, cy)`
    pub fn add_velocity_in_radius(&mut self, cx: i32, cy: i32, radius: i32, dx: f32, dy: f32) {
        commands::add_velocity_in_radius(self, cx, cy, radius, dx, dy)
    }

    /// Zero every field and rewind the frame counter
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    /// Advance the simulation by `dt`
    pub fn step(&mut self) {
        step::step(self);
    }

    // === READ ACCESS ===

    pub fn density(&self) -> &[f32] { &self.density }

    pub fn velocity_x(&self) -> &[f32] { &self.velocity_x }

    pub fn velocity_y(&self) -> &[f32] { &self.velocity_y }

    pub fn field(&self, kind: FieldKind) -> &Field {
        match kind {
            FieldKind::Density => &self.density,
            FieldKind::VelocityX => &self.velocity_x,
            FieldKind::VelocityY => &self.velocity_y,
        }
    }

    /// Value at `(i, j)`, ghost cells included; `None` outside the padded buffer
    pub fn field_at(&self, kind: FieldKind, i: usize, j: usize) -> Option<f32> {
        if !self.grid.in_storage(i, j) {
            return None;
        }
        self.field(kind).get(self.grid.index(i, j)).copied()
    }

    pub fn density_at(&self, i: usize, j: usize) -> Option<f32> {
        self.field_at(FieldKind::Density, i, j)
    }

    /// Sum of interior density
    pub fn total_density(&self) -> f32 {
        render_extract::total_density(self)
    }

    /// Largest interior velocity magnitude
    pub fn max_speed(&self) -> f32 {
        render_extract::max_speed(self)
    }

    // === RENDER TRANSFER ===

    /// Fill the `(N+1)²` vertex heightmap (`density[i, j] * scale`, rows
    /// tightly packed) and return its pointer
    pub fn extract_density_heightmap(&mut self, scale: f32) -> *const f32 {
        render_extract::extract_density_heightmap(self, scale)
    }

    pub fn heightmap(&self) -> &[f32] { &self.heightmap_buffer }

    /// Copy the `N×N` interior of `kind` into a tightly packed buffer and
    /// return its pointer
    pub fn extract_interior(&mut self, kind: FieldKind) -> *const f32 {
        render_extract::extract_interior(self, kind)
    }

    pub fn interior(&self) -> &[f32] { &self.interior_buffer }

    /// Get pointer to density array (for JS rendering)
    pub fn density_ptr(&self) -> *const f32 { self.density.as_ptr() }

    pub fn velocity_x_ptr(&self) -> *const f32 { self.velocity_x.as_ptr() }

    pub fn velocity_y_ptr(&self) -> *const f32 { self.velocity_y.as_ptr() }

    /// Elements per field, `(N+2)²`
    pub fn field_len(&self) -> usize { self.grid.size() }

    pub fn field_byte_len(&self) -> usize { self.density.byte_len() }

    pub(crate) fn abi_layout_data(&self) -> AbiLayoutData {
        AbiLayoutData {
            size: self.grid.n(),
            stride: self.grid.stride(),
            density_ptr: self.density_ptr(),
            velocity_x_ptr: self.velocity_x_ptr(),
            velocity_y_ptr: self.velocity_y_ptr(),
            field_len_elements: self.field_len(),
            field_len_bytes: self.field_byte_len(),
            heightmap_ptr: self.heightmap_buffer.as_ptr(),
            heightmap_len_elements: self.heightmap_buffer.len(),
            interior_ptr: self.interior_buffer.as_ptr(),
            interior_len_elements: self.interior_buffer.len(),
        }
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
