#![cfg(target_arch = "wasm32")]

use stable_fluid_engine::{init, version, FieldKind, FluidSim};
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn init_logs_and_reports_version() {
    init();
    assert_eq!(version(), env!("CARGO_PKG_VERSION"));
}

#[wasm_bindgen_test]
fn invalid_sizes_are_js_errors() {
    assert!(FluidSim::new(0, 0.0, 0.0, 0.1).is_err());
    assert!(FluidSim::new(-4, 0.0, 0.0, 0.1).is_err());
    assert!(FluidSim::from_config_json("[1, 2]".to_string()).is_err());
}

#[wasm_bindgen_test]
fn step_with_perf_in_the_browser_clock() {
    let mut sim = FluidSim::new(32, 0.0001, 0.0001, 0.1).unwrap();
    sim.enable_perf_metrics(true);
    sim.add_density_in_radius(16, 16, 3, 10.0);
    sim.add_velocity(16, 16, 1.0, 0.0);
    sim.step();

    let stats = sim.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert_eq!(stats.relax_sweeps(), 20);

    let ptr = sim.extract_interior(FieldKind::Density);
    assert!(!ptr.is_null());
    assert_eq!(sim.interior_len(), 32 * 32);
}
