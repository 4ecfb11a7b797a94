//! Solver configuration
//!
//! Loadable from JSON so the web app can keep presets next to its other
//! content. Missing keys fall back to the demo defaults.

use serde::{Deserialize, Serialize};

use crate::core::error::FluidResult;

pub const DEFAULT_SIZE: usize = 50;
pub const DEFAULT_DIFFUSION: f32 = 0.0001;
pub const DEFAULT_VISCOSITY: f32 = 0.0001;
pub const DEFAULT_DT: f32 = 0.1;
/// Gauss-Seidel sweeps per diffuse/project call
pub const DEFAULT_ITERATIONS: u32 = 4;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FluidConfig {
    /// Interior cells per axis (`N`)
    pub size: usize,
    pub diffusion: f32,
    pub viscosity: f32,
    pub dt: f32,
    pub iterations: u32,
}

impl Default for FluidConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            diffusion: DEFAULT_DIFFUSION,
            viscosity: DEFAULT_VISCOSITY,
            dt: DEFAULT_DT,
            iterations: DEFAULT_ITERATIONS,
        }
    }
}

impl FluidConfig {
    pub fn new(size: usize, diffusion: f32, viscosity: f32, dt: f32) -> Self {
        Self {
            size,
            diffusion,
            viscosity,
            dt,
            iterations: DEFAULT_ITERATIONS,
        }
    }

    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn from_json(json: &str) -> FluidResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> FluidResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
