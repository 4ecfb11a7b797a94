use wasm_bindgen::prelude::*;

/// Snapshot of the last step (all zeros while perf metrics are off)
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct FluidPerfStats {
    pub(super) step_ms: f64,
    pub(super) diffuse_ms: f64,
    pub(super) project_ms: f64,
    pub(super) advect_ms: f64,
    pub(super) relax_sweeps: u32,
    pub(super) boundary_passes: u32,
    pub(super) grid_size: u32,
    pub(super) memory_bytes: u32,
    pub(super) total_density: f32,
    pub(super) max_speed: f32,
    pub(super) frame: u64,
}

impl FluidPerfStats {
    pub(crate) fn reset(&mut self) {
        *self = FluidPerfStats::default();
    }
}

#[wasm_bindgen]
impl FluidPerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn diffuse_ms(&self) -> f64 { self.diffuse_ms }
    #[wasm_bindgen(getter)]
    pub fn project_ms(&self) -> f64 { self.project_ms }
    #[wasm_bindgen(getter)]
    pub fn advect_ms(&self) -> f64 { self.advect_ms }
    #[wasm_bindgen(getter)]
    pub fn relax_sweeps(&self) -> u32 { self.relax_sweeps }
    #[wasm_bindgen(getter)]
    pub fn boundary_passes(&self) -> u32 { self.boundary_passes }
    #[wasm_bindgen(getter)]
    pub fn grid_size(&self) -> u32 { self.grid_size }
    #[wasm_bindgen(getter)]
    pub fn memory_bytes(&self) -> u32 { self.memory_bytes }
    #[wasm_bindgen(getter)]
    pub fn total_density(&self) -> f32 { self.total_density }
    #[wasm_bindgen(getter)]
    pub fn max_speed(&self) -> f32 { self.max_speed }
    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.frame }
}
