//! Stable Fluid Engine - 2D Stable Fluids solver in WASM
//!
//! Density and velocity on a padded square grid, advanced with the
//! diffuse / project / advect pipeline.
//!
//! Architecture:
//! - core/        - grid geometry, field storage, errors, macros
//! - domain/      - boundary kinds, field kinds, configuration
//! - systems/     - the solver passes (fluid/)
//! - simulation/  - FluidCore state, step driver, JS facade

// Utils with safety macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("Stable Fluid Engine {} initialized", version());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::error::{FluidError, FluidResult};
pub use crate::core::field::Field;
pub use crate::core::grid::Grid;
pub use domain::boundary::BoundaryKind;
pub use domain::config::FluidConfig;
pub use domain::fields::FieldKind;
pub use simulation::{AbiLayout, FluidCore, FluidPerfStats, FluidSim};
pub use systems::fluid;
