use stable_fluid_engine::FluidSim;

#[test]
fn perf_smoke_step() {
    let mut sim = FluidSim::new(128, 0.0001, 0.0001, 0.1).unwrap();
    sim.enable_perf_metrics(true);
    sim.add_density_in_radius(64, 64, 10, 5.0);
    sim.add_velocity_in_radius(64, 64, 10, 0.5, -0.25);
    sim.step();

    let stats = sim.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert!(stats.diffuse_ms() >= 0.0);
    assert!(stats.project_ms() >= 0.0);
    assert!(stats.advect_ms() >= 0.0);
    assert_eq!(stats.relax_sweeps(), 20);
    assert_eq!(stats.boundary_passes(), 31);
    assert_eq!(stats.grid_size(), 130 * 130);
    assert_eq!(stats.frame(), 1);
    assert!(stats.total_density() > 0.0);
}

#[test]
fn perf_smoke_disabled_is_zero() {
    let mut sim = FluidSim::new(32, 0.0001, 0.0001, 0.1).unwrap();
    sim.add_density(16, 16, 1.0);
    sim.step();

    let stats = sim.get_perf_stats();
    assert_eq!(stats.step_ms(), 0.0);
    assert_eq!(stats.relax_sweeps(), 0);
    assert_eq!(sim.frame(), 1);
}
