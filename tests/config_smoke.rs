use stable_fluid_engine::{FieldKind, FluidConfig, FluidCore, FluidError, FluidSim};

#[test]
fn facade_builds_from_config_json() {
    let sim = FluidSim::from_config_json(r#"{ "size": 20, "dt": 0.05 }"#.to_string()).unwrap();
    assert_eq!(sim.size(), 20);
    assert_eq!(sim.field_len(), 22 * 22);
    assert_eq!(sim.field_byte_len(), 22 * 22 * 4);

    let config = FluidConfig::from_json(&sim.config_json().unwrap()).unwrap();
    assert_eq!(config.size, 20);
    assert_eq!(config.dt, 0.05);
    assert_eq!(config.iterations, 4);
    assert_eq!(config.diffusion, 0.0001);
}

#[test]
fn bad_config_surfaces_a_config_error() {
    assert!(matches!(
        FluidCore::from_config_json("not json"),
        Err(FluidError::Config(_))
    ));
}

#[test]
fn facade_transfer_buffers_match_abi_layout() {
    let mut sim = FluidSim::new(10, 0.0, 0.0, 0.1).unwrap();
    assert!(sim.add_density(3, 3, 4.0));
    assert!(!sim.add_density(40, 3, 4.0));

    let height_ptr = sim.extract_density_heightmap(0.5);
    let interior_ptr = sim.extract_interior(FieldKind::Density);
    assert_eq!(sim.heightmap_len(), 11 * 11);
    assert_eq!(sim.interior_len(), 100);

    let layout = sim.abi_layout();
    assert_eq!(layout.size(), 10);
    assert_eq!(layout.stride(), 12);
    assert_eq!(layout.field_len_elements(), 144);
    assert_eq!(layout.heightmap_len_elements(), 121);
    assert_eq!(layout.interior_len_elements(), 100);

    let core = sim.core();
    assert_eq!(core.heightmap().as_ptr(), height_ptr);
    assert_eq!(core.interior().as_ptr(), interior_ptr);
    assert_eq!(core.heightmap()[3 * 11 + 3], 2.0);
    assert_eq!(core.interior()[2 * 10 + 2], 4.0);
}

#[test]
fn facade_clear_rewinds() {
    let mut sim = FluidSim::new(16, 0.0001, 0.0001, 0.1).unwrap();
    sim.add_density_in_radius(8, 8, 4, 2.0);
    sim.step();
    assert!(sim.total_density() > 0.0);

    sim.clear();
    assert_eq!(sim.frame(), 0);
    assert_eq!(sim.total_density(), 0.0);
    assert_eq!(sim.max_speed(), 0.0);
}
