use approx::assert_relative_eq;
use flight_calculator::config::{ConfigError, DistanceModel, ScenarioConfig};
use flight_calculator::kinematics::DistanceIntegration;
use flight_calculator::{ErrorKind, StepError, compute, compute_all};

#[test]
fn reference_scenario_matches_published_figures() {
    let outcome = compute(&ScenarioConfig::default()).expect("reference scenario");
    assert_relative_eq!(outcome.velocity_km_h, 48_880.0, epsilon = 1e-9);
    assert_relative_eq!(outcome.distance_km, 10_000.0, epsilon = 1e-9);
    assert_relative_eq!(outcome.remaining_fuel_kg, 3_200.0, epsilon = 1e-9);
    assert_eq!(outcome.distance_integration, DistanceIntegration::InitialVelocity);
    assert_eq!(outcome.scenario, "reference");
}

#[test]
fn short_tank_fails_with_fuel_depleted() {
    let config = ScenarioConfig {
        initial_fuel_kg: 100.0,
        burn_rate_kg_s: 1.0,
        ..ScenarioConfig::default()
    };
    let err = compute(&config).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::FuelDepleted);
    assert!(matches!(err, StepError::Fuel(_)));
}

#[test]
fn quoted_acceleration_is_invalid_input() {
    let toml = r#"
        initial_velocity_km_h = 10000
        acceleration_m_s2 = "3"
        elapsed_s = 3600
        initial_distance_km = 0
        initial_fuel_kg = 5000
        burn_rate_kg_s = 0.5
    "#;
    match ScenarioConfig::from_toml_str(toml) {
        Err(ConfigError::InvalidInput(input)) => {
            assert_eq!(input.name, "acceleration_m_s2");
            assert_eq!(input.kind(), ErrorKind::InvalidInput);
        }
        other => panic!("expected invalid input, got {other:?}"),
    }
}

#[test]
fn quoted_acceleration_in_yaml_is_invalid_input() {
    let yaml = r#"
- name: quoted
  initial_velocity_km_h: 10000
  acceleration_m_s2: "3"
  elapsed_s: 3600
  initial_distance_km: 0
  initial_fuel_kg: 5000
  burn_rate_kg_s: 0.5
"#;
    match ScenarioConfig::from_yaml_str(yaml) {
        Err(ConfigError::InvalidInput(input)) => {
            assert_eq!(input.name, "acceleration_m_s2");
            assert_eq!(input.kind(), ErrorKind::InvalidInput);
        }
        other => panic!("expected invalid input, got {other:?}"),
    }
}

#[test]
fn integer_literals_are_numbers() {
    let toml = r#"
        name = "integers"
        initial_velocity_km_h = 10000
        acceleration_m_s2 = 3
        elapsed_s = 3600
        initial_distance_km = 0
        initial_fuel_kg = 5000
        burn_rate_kg_s = 0.5
    "#;
    let config = ScenarioConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.acceleration_m_s2, 3.0);
    assert_eq!(config.distance_integration, DistanceModel::InitialVelocity);
}

#[test]
fn negative_time_is_rejected_before_any_result() {
    let config = ScenarioConfig {
        elapsed_s: -60.0,
        ..ScenarioConfig::default()
    };
    let err = compute(&config).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
    assert!(err.to_string().contains("elapsed_s"), "message = {err}");
}

#[test]
fn average_velocity_scenario_from_yaml() {
    let yaml = r#"
- name: averaged
  initial_velocity_km_h: 10000.0
  acceleration_m_s2: 3.0
  elapsed_s: 3600.0
  initial_distance_km: 0.0
  initial_fuel_kg: 5000.0
  burn_rate_kg_s: 0.5
  distance_integration: average-velocity
"#;
    let configs = ScenarioConfig::from_yaml_str(yaml).unwrap();
    let outcomes = compute_all(&configs).unwrap();
    assert_eq!(outcomes.len(), 1);
    assert_relative_eq!(outcomes[0].distance_km, 29_440.0, epsilon = 1e-9);
    assert_relative_eq!(outcomes[0].velocity_km_h, 48_880.0, epsilon = 1e-9);
}

#[test]
fn compute_all_stops_at_the_first_failure() {
    let good = ScenarioConfig::default();
    let bad = ScenarioConfig {
        burn_rate_kg_s: -0.5,
        ..ScenarioConfig::default()
    };
    let err = compute_all(&[good, bad]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

#[test]
fn scenarios_run_concurrently_with_identical_results() {
    let config = ScenarioConfig::default();
    let expected = compute(&config).unwrap();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4).map(|_| scope.spawn(|| compute(&config))).collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap().unwrap(), expected);
        }
    });
}
