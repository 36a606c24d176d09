//! Reference tables from the Washington Electric Airport Feasibility Study (2022).

use super::records::{AircraftProfile, ChargingLevel, GrowthScenario};

/// Charging level selected when the caller does not pick one.
pub const DEFAULT_CHARGING_LEVEL: &str = "Level 3+ (DCFC)";

fn models(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

pub(super) fn aircraft_profiles() -> Vec<AircraftProfile> {
    vec![
        AircraftProfile {
            category: "General Aviation".to_string(),
            models: models(&["Pipistrel Alpha Electro", "Bye eFlyer 2"]),
            power_demand_kw: 56.0,
            range_mi: 92.5,
            cruise_speed_mph: 108.5,
        },
        AircraftProfile {
            category: "Air Taxi".to_string(),
            models: models(&["Eviation Alice"]),
            power_demand_kw: 680.0,
            range_mi: 506.0,
            cruise_speed_mph: 289.0,
        },
        AircraftProfile {
            category: "eVTOL".to_string(),
            models: models(&["Joby", "Wisk"]),
            power_demand_kw: 350.0,
            range_mi: 100.0,
            cruise_speed_mph: 150.0,
        },
    ]
}

pub(super) fn charging_levels() -> Vec<ChargingLevel> {
    vec![
        ChargingLevel {
            name: "Level 1".to_string(),
            power_kw: 1.0,
            description: "120V AC, ~1 kW, slow charging".to_string(),
        },
        ChargingLevel {
            name: "Level 2".to_string(),
            power_kw: 20.0,
            description: "240V AC, up to 20 kW".to_string(),
        },
        ChargingLevel {
            name: DEFAULT_CHARGING_LEVEL.to_string(),
            power_kw: 350.0,
            description: "DC Fast Charge, 20–350 kW".to_string(),
        },
    ]
}

pub(super) fn growth_scenarios() -> Vec<GrowthScenario> {
    vec![
        GrowthScenario {
            name: "Low".to_string(),
            feasibility_rate: 0.3,
            adoption_rate: 0.35,
            ops_growth_years: 10,
        },
        GrowthScenario {
            name: "Medium".to_string(),
            feasibility_rate: 0.5,
            adoption_rate: 0.5,
            ops_growth_years: 8,
        },
        GrowthScenario {
            name: "High".to_string(),
            feasibility_rate: 0.7,
            adoption_rate: 0.85,
            ops_growth_years: 5,
        },
    ]
}
