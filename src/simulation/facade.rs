use wasm_bindgen::prelude::*;

use crate::core::error::FluidError;
use crate::domain::fields::FieldKind;

use super::perf_stats::FluidPerfStats;
use super::FluidCore;

#[wasm_bindgen]
pub struct AbiLayout {
    size: u32,
    stride: u32,
    density_ptr: u32,
    velocity_x_ptr: u32,
    velocity_y_ptr: u32,
    field_len_elements: u32,
    field_len_bytes: u32,
    heightmap_ptr: u32,
    heightmap_len_elements: u32,
    interior_ptr: u32,
    interior_len_elements: u32,
}

#[wasm_bindgen]
impl AbiLayout {
    #[wasm_bindgen(getter)]
    pub fn size(&self) -> u32 { self.size }
    #[wasm_bindgen(getter)]
    pub fn stride(&self) -> u32 { self.stride }

    #[wasm_bindgen(getter)]
    pub fn density_ptr(&self) -> u32 { self.density_ptr }
    #[wasm_bindgen(getter)]
    pub fn velocity_x_ptr(&self) -> u32 { self.velocity_x_ptr }
    #[wasm_bindgen(getter)]
    pub fn velocity_y_ptr(&self) -> u32 { self.velocity_y_ptr }
    #[wasm_bindgen(getter)]
    pub fn field_len_elements(&self) -> u32 { self.field_len_elements }
    #[wasm_bindgen(getter)]
    pub fn field_len_bytes(&self) -> u32 { self.field_len_bytes }

    #[wasm_bindgen(getter)]
    pub fn heightmap_ptr(&self) -> u32 { self.heightmap_ptr }
    #[wasm_bindgen(getter)]
    pub fn heightmap_len_elements(&self) -> u32 { self.heightmap_len_elements }

    #[wasm_bindgen(getter)]
    pub fn interior_ptr(&self) -> u32 { self.interior_ptr }
    #[wasm_bindgen(getter)]
    pub fn interior_len_elements(&self) -> u32 { self.interior_len_elements }
}

fn to_js_error(err: FluidError) -> JsValue {
    console_warn!("[fluid] {}", err);
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
pub struct FluidSim {
    core: FluidCore,
}

#[wasm_bindgen]
impl FluidSim {
    /// Create a solver with `size` interior cells per axis
    #[wasm_bindgen(constructor)]
    pub fn new(size: i32, diffusion: f32, viscosity: f32, dt: f32) -> Result<FluidSim, JsValue> {
        if size <= 0 {
            return Err(to_js_error(FluidError::InvalidResolution { size: size as i64 }));
        }
        let core = FluidCore::new(size as usize, diffusion, viscosity, dt).map_err(to_js_error)?;
        Ok(Self { core })
    }

    /// Create a solver from a JSON `FluidConfig`; missing keys take defaults
    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: String) -> Result<FluidSim, JsValue> {
        let core = FluidCore::from_config_json(&json).map_err(to_js_error)?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn size(&self) -> u32 { self.core.size() as u32 }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    /// Current parameters as JSON (same shape `fromConfigJson` accepts)
    pub fn config_json(&self) -> Result<String, JsValue> {
        self.core.config().to_json().map_err(to_js_error)
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> FluidPerfStats {
        self.core.get_perf_stats()
    }

    pub fn add_density(&mut self, x: u32, y: u32, amount: f32) -> bool {
        self.core.add_density(x as usize, y as usize, amount)
    }

    pub fn add_velocity(&mut self, x: u32, y: u32, dx: f32, dy: f32) -> bool {
        self.core.add_velocity(x as usize, y as usize, dx, dy)
    }

    /// Add density in radius (brush)
    pub fn add_density_in_radius(&mut self, cx: i32, cy: i32, radius: i32, amount: f32) {
        self.core.add_density_in_radius(cx, cy, radius, amount)
    }

    /// Add velocity in radius (brush)
    pub fn add_velocity_in_radius(&mut self, cx: i32, cy: i32, radius: i32, dx: f32, dy: f32) {
        self.core.add_velocity_in_radius(cx, cy, radius, dx, dy)
    }

    pub fn step(&mut self) {
        self.core.step();
    }

    pub fn clear(&mut self) {
        self.core.clear();
    }

    pub fn total_density(&self) -> f32 {
        self.core.total_density()
    }

    pub fn max_speed(&self) -> f32 {
        self.core.max_speed()
    }

    // === RAW FIELD ACCESS ===

    /// Get pointer to density array (`(N+2)²` f32, row-major, ghosts included)
    pub fn density_ptr(&self) -> *const f32 {
        self.core.density_ptr()
    }

    pub fn velocity_x_ptr(&self) -> *const f32 {
        self.core.velocity_x_ptr()
    }

    pub fn velocity_y_ptr(&self) -> *const f32 {
        self.core.velocity_y_ptr()
    }

    pub fn field_len(&self) -> usize {
        self.core.field_len()
    }

    pub fn field_byte_len(&self) -> usize {
        self.core.field_byte_len()
    }

    // === RENDER TRANSFER ===

    /// Fill the `(N+1)²` heightmap and return its pointer.
    /// Valid until the next call that resizes the buffer.
    pub fn extract_density_heightmap(&mut self, scale: f32) -> *const f32 {
        self.core.extract_density_heightmap(scale)
    }

    pub fn heightmap_len(&self) -> usize {
        self.core.heightmap().len()
    }

    /// Copy the `N×N` interior of a field and return the buffer pointer
    pub fn extract_interior(&mut self, field: FieldKind) -> *const f32 {
        self.core.extract_interior(field)
    }

    pub fn interior_len(&self) -> usize {
        self.core.interior().len()
    }

    pub fn abi_layout(&self) -> AbiLayout {
        let data = self.core.abi_layout_data();
        AbiLayout {
            size: data.size as u32,
            stride: data.stride as u32,
            density_ptr: data.density_ptr as u32,
            velocity_x_ptr: data.velocity_x_ptr as u32,
            velocity_y_ptr: data.velocity_y_ptr as u32,
            field_len_elements: data.field_len_elements as u32,
            field_len_bytes: data.field_len_bytes as u32,
            heightmap_ptr: data.heightmap_ptr as u32,
            heightmap_len_elements: data.heightmap_len_elements as u32,
            interior_ptr: data.interior_ptr as u32,
            interior_len_elements: data.interior_len_elements as u32,
        }
    }
}

impl FluidSim {
    /// Native access to the wrapped solver
    pub fn core(&self) -> &FluidCore {
        &self.core
    }
}
