use aerocharge_lib::catalog::reference_catalog;
use aerocharge_lib::error::{CatalogKind, Error};

#[test]
fn aircraft_table_matches_study_values() {
    let catalog = reference_catalog().unwrap();
    assert_eq!(
        catalog.category_names(),
        vec!["General Aviation", "Air Taxi", "eVTOL"]
    );

    let expected = [
        ("General Aviation", 56.0, 92.5, 108.5),
        ("Air Taxi", 680.0, 506.0, 289.0),
        ("eVTOL", 350.0, 100.0, 150.0),
    ];
    for (category, power, range, speed) in expected {
        let profile = catalog.aircraft(category).expect("category present");
        assert_eq!(profile.power_demand_kw, power, "{category} power");
        assert_eq!(profile.range_mi, range, "{category} range");
        assert_eq!(profile.cruise_speed_mph, speed, "{category} speed");
    }
}

#[test]
fn charging_table_matches_study_values() {
    let catalog = reference_catalog().unwrap();
    let levels: Vec<(&str, f64)> = catalog
        .charging_levels()
        .iter()
        .map(|l| (l.name.as_str(), l.power_kw))
        .collect();
    assert_eq!(
        levels,
        vec![("Level 1", 1.0), ("Level 2", 20.0), ("Level 3+ (DCFC)", 350.0)]
    );
    assert_eq!(catalog.default_charging_level().name, "Level 3+ (DCFC)");
}

#[test]
fn scenario_table_matches_study_values() {
    let catalog = reference_catalog().unwrap();
    let expected = [
        ("Low", 0.3, 0.35, 10),
        ("Medium", 0.5, 0.5, 8),
        ("High", 0.7, 0.85, 5),
    ];
    for (name, feasibility, adoption, years) in expected {
        let scenario = catalog.scenario(name).expect("scenario present");
        assert_eq!(scenario.feasibility_rate, feasibility);
        assert_eq!(scenario.adoption_rate, adoption);
        assert_eq!(scenario.ops_growth_years, years);
    }
    assert_eq!(catalog.default_scenario().name, "Low");
}

#[test]
fn unknown_category_is_not_found_with_suggestion() {
    let err = reference_catalog().unwrap()
        .aircraft("Air Taxy")
        .expect_err("typo should fail");

    let message = err.to_string();
    assert!(message.contains("unknown aircraft category"));
    assert!(message.contains("Did you mean"));
    assert!(message.contains("Air Taxi"));

    match err {
        Error::NotFound { kind, .. } => assert_eq!(kind, CatalogKind::AircraftCategory),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn catalog_serializes_tables_in_order() {
    let json = serde_json::to_value(reference_catalog().unwrap()).expect("serializable");
    assert_eq!(json["aircraft"][0]["category"], "General Aviation");
    assert_eq!(json["charging_levels"][2]["power_kw"], 350.0);
    assert_eq!(json["scenarios"][1]["name"], "Medium");
    assert!(json.get("default_charging_level").is_none());
}
