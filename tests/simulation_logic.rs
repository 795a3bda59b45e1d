use coherence_lib::config::ModelConfig;
use coherence_lib::engine::Simulation;
use coherence_lib::summary::decade_summary;
use coherence_lib::DriverSeries;

#[test]
fn test_simulation_lifecycle() {
    // 1. Setup
    let config = ModelConfig::default();
    let drivers = DriverSeries::baseline();
    let sim = Simulation::new(config.clone(), drivers.clone()).expect("Failed to create sim");

    // 2. Run the full horizon
    let trajectory = sim.run().expect("Run failed");

    // 3. Verify shape: 8 decades at 100 steps each, plus the seed point
    assert_eq!(trajectory.len(), 801);
    assert_eq!(trajectory.first_state().unwrap().year, 1950.0);
    assert!((trajectory.final_state().unwrap().year - 2030.0).abs() < 1e-9);

    // Time strictly increases along the trajectory
    for pair in trajectory.states().windows(2) {
        assert!(pair[1].t > pair[0].t, "Time must strictly increase");
    }

    // Every recorded value is finite
    for state in &trajectory {
        assert!(state.entropy.is_finite());
        assert!(state.recognition.is_finite());
        assert!(state.stability.is_finite());
    }
}

#[test]
fn test_entropy_compounds_under_baseline() {
    let trajectory = Simulation::new(ModelConfig::default(), DriverSeries::baseline())
        .unwrap()
        .run()
        .unwrap();

    for pair in trajectory.states().windows(2) {
        assert!(
            pair[1].entropy >= pair[0].entropy,
            "Entropy should be non-decreasing under baseline drivers (year {})",
            pair[1].year
        );
        assert!(
            pair[1].recognition <= pair[0].recognition,
            "Recognition should be non-increasing under baseline drivers (year {})",
            pair[1].year
        );
    }

    let first = trajectory.first_state().unwrap();
    let last = trajectory.final_state().unwrap();
    assert!(last.entropy > first.entropy);
    assert!(last.recognition < first.recognition);
}

#[test]
fn test_decade_summary_of_default_run() {
    let config = ModelConfig::default();
    let drivers = DriverSeries::baseline();
    let trajectory = Simulation::new(config.clone(), drivers.clone())
        .unwrap()
        .run()
        .unwrap();

    let summary = decade_summary(&trajectory, &config, &drivers);
    assert_eq!(summary.len(), 8);

    let rows = summary.rows();
    assert_eq!(rows[0].label, "1950s");
    assert_eq!(rows[0].year, 1950);
    assert_eq!(rows[7].label, "2020s");
    for pair in rows.windows(2) {
        assert_eq!(pair[1].year - pair[0].year, 10);
        assert!(pair[1].entropy >= pair[0].entropy);
    }

    // Late-run dynamic entropy dwarfs the opening decade's equilibrium.
    assert!(rows[7].entropy > rows[0].equilibrium_entropy);
}

#[test]
fn test_sampled_views_of_trajectory() {
    let trajectory = Simulation::new(ModelConfig::default(), DriverSeries::baseline())
        .unwrap()
        .run()
        .unwrap();

    // One sample per decade start across 1950..=2030
    let decades = trajectory.sample_every_years(10.0);
    assert_eq!(decades.len(), 9);
    for pair in decades.windows(2) {
        assert!((pair[1].year - pair[0].year - 10.0).abs() < 1e-6);
    }

    // Half-decade view restricted to 1950..=2025
    let half_decades = trajectory
        .between_years(1950.0, 2025.0)
        .sample_every_years(5.0);
    assert_eq!(half_decades.len(), 16);
    assert_eq!(half_decades[0].year, 1950.0);
    assert!((half_decades[15].year - 2025.0).abs() < 1e-6);
}

#[test]
fn test_config_round_trip_through_toml() {
    let config = ModelConfig::default();
    let text = toml::to_string(&config).expect("serialize config");
    let parsed = ModelConfig::from_toml(&text).expect("parse config");
    assert_eq!(parsed, config);
}
