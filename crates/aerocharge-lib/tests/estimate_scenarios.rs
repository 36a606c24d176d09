use aerocharge_lib::{
    build_report, estimate, reference_catalog, CalculationInput, DemandConfig, Error,
};

fn input(category: &str, ops: u64, level: &str, window: u32, scenario: &str) -> CalculationInput {
    CalculationInput {
        category: category.to_string(),
        num_operations: ops,
        charging_level: level.to_string(),
        charging_window_hours: window,
        scenario: scenario.to_string(),
    }
}

#[test]
fn general_aviation_medium_annual_energy() {
    let result = estimate(
        reference_catalog().unwrap(),
        &input("General Aviation", 10_000, "Level 3+ (DCFC)", 8, "Medium"),
        &DemandConfig::default(),
    )
    .expect("valid input");

    assert!((result.flight.flight_duration_hours - 0.8525).abs() < 1e-4);
    assert!((result.flight.energy_per_flight_kwh - 47.74).abs() < 1e-2);
    assert!((result.annual_energy_mwh - 59.68).abs() < 1e-2);
    assert_eq!(result.annual_electric_flights, 1_250.0);
}

#[test]
fn general_aviation_medium_power_demand() {
    let result = estimate(
        reference_catalog().unwrap(),
        &input("General Aviation", 10_000, "Level 3+ (DCFC)", 8, "Medium"),
        &DemandConfig::default(),
    )
    .expect("valid input");

    assert!((result.average_power_kw - 6.81).abs() < 1e-2);
    assert!((result.peak_power_mw - 0.0625).abs() < 1e-4);
    assert!(result.capacity_warning.is_none());
}

#[test]
fn air_taxi_high_on_level_two_warns() {
    let result = estimate(
        reference_catalog().unwrap(),
        &input("Air Taxi", 50_000, "Level 2", 4, "High"),
        &DemandConfig::default(),
    )
    .expect("valid input");

    let peak_kw = result.peak_power_mw * 1000.0;
    assert!(peak_kw > 20.0);

    let warning = result.capacity_warning.expect("Level 2 is undersized");
    assert!(warning.message.contains("Level 2"));
    assert!(warning.message.contains("20 kW"));
    assert!(warning
        .message
        .contains(&format!("{:.2} MW", result.peak_power_mw)));
    assert_eq!(warning.rated_power_kw, 20.0);
}

#[test]
fn zero_operations_produce_zero_everything() {
    let result = estimate(
        reference_catalog().unwrap(),
        &input("eVTOL", 0, "Level 1", 1, "High"),
        &DemandConfig::default(),
    )
    .expect("valid input");

    assert_eq!(result.annual_energy_mwh, 0.0);
    assert_eq!(result.average_power_kw, 0.0);
    assert_eq!(result.peak_power_mw, 0.0);
    assert!(result.capacity_warning.is_none());
}

#[test]
fn zero_hour_window_is_invalid_input() {
    let err = estimate(
        reference_catalog().unwrap(),
        &input("General Aviation", 10_000, "Level 2", 0, "Low"),
        &DemandConfig::default(),
    )
    .expect_err("window of zero");

    match err {
        Error::InvalidInput { message } => assert!(message.contains("charging_window_hours")),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn invalid_config_is_rejected_before_computing() {
    let config = DemandConfig {
        charging_curve_factor: -1.0,
        ..DemandConfig::default()
    };
    let err = estimate(
        reference_catalog().unwrap(),
        &CalculationInput::with_defaults(reference_catalog().unwrap()),
        &config,
    )
    .expect_err("negative factor");
    assert!(matches!(err, Error::InvalidConfig { .. }));
}

#[test]
fn report_serializes_for_presentation() {
    let report = build_report(
        reference_catalog().unwrap(),
        &input("Air Taxi", 50_000, "Level 2", 4, "High"),
        &DemandConfig::default(),
    )
    .expect("valid input");

    let json = serde_json::to_value(&report).expect("serializable");
    assert_eq!(json["input"]["category"], "Air Taxi");
    assert!(json["result"]["capacity_warning"]["message"]
        .as_str()
        .unwrap()
        .contains("Level 2"));
    assert_eq!(json["assumptions"]["ops_growth_years"], 5);
}
