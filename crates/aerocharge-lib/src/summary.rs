//! Assumption summary echoed alongside every estimate.
//!
//! Percent annotations are derived from the configured multipliers, which
//! [`DemandConfig::validate`] keeps at or above 1.0.

use std::fmt::Write;

use serde::Serialize;

use crate::demand::DemandConfig;
use crate::estimate::{CalculationInput, Selection};

/// Closing guidance shown under every assumption summary.
pub const DCFC_NOTE: &str = "This calculator assumes Level 3+ (DCFC) as the default for commercial operations. \
Lower levels may not support rapid charging needed for high-frequency operations. \
Always verify with your utility provider.";

/// Echo of the selections and constants behind an estimate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssumptionSummary {
    pub category: String,
    pub aircraft_models: Vec<String>,
    pub num_operations: u64,
    pub charging_level: String,
    pub charging_level_description: String,
    pub charging_level_power_kw: f64,
    pub charging_window_hours: u32,
    pub scenario: String,
    pub feasibility_rate: f64,
    pub adoption_rate: f64,
    pub ops_growth_years: u32,
    pub power_demand_kw: f64,
    pub range_mi: f64,
    pub cruise_speed_mph: f64,
    pub seasonality_factor: f64,
    pub charging_curve_factor: f64,
    pub note: String,
}

/// Single labelled line of a rendered summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssumptionLine {
    pub label: &'static str,
    pub value: String,
}

impl AssumptionSummary {
    pub fn new(selection: &Selection<'_>, input: &CalculationInput, config: &DemandConfig) -> Self {
        let aircraft = selection.aircraft;
        let level = selection.charging_level;
        let scenario = selection.scenario;

        Self {
            category: aircraft.category.clone(),
            aircraft_models: aircraft.models.clone(),
            num_operations: input.num_operations,
            charging_level: level.name.clone(),
            charging_level_description: level.description.clone(),
            charging_level_power_kw: level.power_kw,
            charging_window_hours: input.charging_window_hours,
            scenario: scenario.name.clone(),
            feasibility_rate: scenario.feasibility_rate,
            adoption_rate: scenario.adoption_rate,
            ops_growth_years: scenario.ops_growth_years,
            power_demand_kw: aircraft.power_demand_kw,
            range_mi: aircraft.range_mi,
            cruise_speed_mph: aircraft.cruise_speed_mph,
            seasonality_factor: config.seasonality_factor,
            charging_curve_factor: config.charging_curve_factor,
            note: DCFC_NOTE.to_string(),
        }
    }

    /// Labelled lines in display order.
    pub fn lines(&self) -> Vec<AssumptionLine> {
        let seasonality_uplift = (self.seasonality_factor - 1.0) * 100.0;
        let curve_uplift = (self.charging_curve_factor - 1.0) * 100.0;

        let mut lines = vec![
            line("Operation Category", self.category.clone()),
            line("Number of Operations", self.num_operations.to_string()),
            line(
                "Charging Level",
                format!(
                    "{} ({})",
                    self.charging_level, self.charging_level_description
                ),
            ),
            line(
                "Charging Window",
                format!("{} hours", self.charging_window_hours),
            ),
            line("Scenario", self.scenario.clone()),
            line(
                "Feasibility Rate",
                format!("{:.0}%", self.feasibility_rate * 100.0),
            ),
            line("Adoption Rate", format!("{:.0}%", self.adoption_rate * 100.0)),
            line(
                "Aircraft Specs",
                format!(
                    "Power: {} kW, Range: {} mi, Cruise Speed: {} mph",
                    self.power_demand_kw, self.range_mi, self.cruise_speed_mph
                ),
            ),
            line(
                "Seasonality",
                format!(
                    "{} ({:.0}% higher in peak month)",
                    self.seasonality_factor, seasonality_uplift
                ),
            ),
            line(
                "Charging Curve Factor",
                format!(
                    "{} ({:.0}% higher peak vs average)",
                    self.charging_curve_factor, curve_uplift
                ),
            ),
        ];

        if !self.aircraft_models.is_empty() {
            lines.push(line("Representative Models", self.aircraft_models.join(", ")));
        }
        lines.push(line(
            "Scenario Horizon",
            format!("{} years (informational)", self.ops_growth_years),
        ));

        lines
    }

    /// Render the summary as plain-text bullet lines followed by the note.
    pub fn render_plain(&self) -> String {
        let mut buffer = String::new();
        for entry in self.lines() {
            let _ = writeln!(buffer, "- {}: {}", entry.label, entry.value);
        }
        let _ = write!(buffer, "\nNote: {}", self.note);
        buffer
    }
}

fn line(label: &'static str, value: String) -> AssumptionLine {
    AssumptionLine { label, value }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::reference_catalog;
    use crate::error::Error;
    use crate::estimate::build_report;

    fn medium_ga_summary() -> AssumptionSummary {
        let catalog = reference_catalog().unwrap();
        let input = CalculationInput {
            scenario: "Medium".to_string(),
            ..CalculationInput::with_defaults(catalog)
        };
        let selection = Selection::resolve(catalog, &input).expect("defaults resolve");
        AssumptionSummary::new(&selection, &input, &DemandConfig::default())
    }

    #[test]
    fn lines_match_study_wording() {
        let summary = medium_ga_summary();
        let rendered: Vec<String> = summary
            .lines()
            .into_iter()
            .map(|l| format!("{}: {}", l.label, l.value))
            .collect();

        assert_eq!(rendered[0], "Operation Category: General Aviation");
        assert_eq!(rendered[1], "Number of Operations: 10000");
        assert_eq!(
            rendered[2],
            "Charging Level: Level 3+ (DCFC) (DC Fast Charge, 20–350 kW)"
        );
        assert_eq!(rendered[3], "Charging Window: 8 hours");
        assert_eq!(rendered[5], "Feasibility Rate: 50%");
        assert_eq!(
            rendered[7],
            "Aircraft Specs: Power: 56 kW, Range: 92.5 mi, Cruise Speed: 108.5 mph"
        );
        assert_eq!(rendered[8], "Seasonality: 1.7 (70% higher in peak month)");
        assert_eq!(
            rendered[9],
            "Charging Curve Factor: 1.8 (80% higher peak vs average)"
        );
    }

    #[test]
    fn plain_render_ends_with_note() {
        let text = medium_ga_summary().render_plain();
        assert!(text.starts_with("- Operation Category: General Aviation\n"));
        assert!(text.contains("- Representative Models: Pipistrel Alpha Electro, Bye eFlyer 2"));
        assert!(text.contains("- Scenario Horizon: 8 years (informational)"));
        assert!(text.trim_end().ends_with("Always verify with your utility provider."));
    }

    #[test]
    fn flat_multipliers_annotate_zero_uplift() {
        let catalog = reference_catalog().unwrap();
        let input = CalculationInput::with_defaults(catalog);
        let config = DemandConfig {
            seasonality_factor: 1.0,
            charging_curve_factor: 1.0,
            ..DemandConfig::default()
        };
        let report = build_report(catalog, &input, &config).expect("flat factors are valid");
        let lines = report.assumptions.lines();
        assert_eq!(lines[8].value, "1 (0% higher in peak month)");
        assert_eq!(lines[9].value, "1 (0% higher peak vs average)");
    }

    #[test]
    fn multiplier_below_one_never_reaches_the_summary() {
        let catalog = reference_catalog().unwrap();
        let input = CalculationInput::with_defaults(catalog);
        let config = DemandConfig {
            seasonality_factor: 0.5,
            ..DemandConfig::default()
        };
        let err = build_report(catalog, &input, &config).expect_err("peak below average");
        assert!(matches!(err, Error::InvalidConfig { .. }));
    }
}
