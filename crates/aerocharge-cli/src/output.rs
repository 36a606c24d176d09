//! Rendering of estimates and reference tables.
//!
//! Renderers build a `String` so that callers decide where it goes; only the
//! banner and footer print directly.

use std::fmt::Write;

use clap::ValueEnum;
use serde::Serialize;

use aerocharge_lib::{
    AircraftProfile, CapacityWarning, ChargingLevel, EstimateReport, GrowthScenario,
    ReferenceCatalog,
};

use crate::terminal::{format_decimal, format_with_separators, supports_color, ColorPalette};

/// Decimal places used for the three headline metrics.
pub const METRIC_PRECISION: usize = 2;

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Reference table selected by the `catalog` subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CatalogTable {
    /// Aircraft categories.
    Aircraft,
    /// Charging levels.
    Charging,
    /// Growth scenarios.
    Scenarios,
}

/// Print the CLI banner.
///
/// Uses box-drawing characters when the locale is UTF-8 and falls back to ASCII.
pub fn print_logo() {
    use crate::terminal::{colors, supports_unicode};

    let (orange, cyan, reset) = if supports_color() {
        (colors::ORANGE, colors::CYAN, colors::RESET)
    } else {
        ("", "", "")
    };

    if supports_unicode() {
        println!(
            "{cyan}╭──────────────────────────────────────────╮{reset}
{cyan}│{orange}  ⚡ AEROCHARGE                            {cyan}│{reset}
{cyan}│{orange}     electric aircraft charging estimator {cyan}│{reset}
{cyan}╰──────────────────────────────────────────╯{reset}"
        );
    } else {
        println!(
            "{orange}+------------------------------------------+
|  AEROCHARGE                              |
|  >> ELECTRIC AIRCRAFT CHARGING ESTIMATOR |
+------------------------------------------+{reset}"
        );
    }
}

/// Print the footer with elapsed time.
pub fn print_footer(elapsed: std::time::Duration) {
    use crate::terminal::colors;

    let (gray, reset) = if supports_color() {
        (colors::GRAY, colors::RESET)
    } else {
        ("", "")
    };

    let elapsed_ms = elapsed.as_millis();
    let time_str = if elapsed_ms < 1000 {
        format!("{}ms", elapsed_ms)
    } else {
        format!("{:.2}s", elapsed.as_secs_f64())
    };

    println!("\n{gray}Completed in {}{reset}", time_str);
}

/// Serialize any report or table as pretty JSON.
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

/// Render an estimate: results, capacity advisory (if any) and assumptions.
pub fn render_estimate(report: &EstimateReport, palette: &ColorPalette) -> String {
    let p = palette;
    let result = &report.result;
    let mut out = String::new();

    let _ = writeln!(out, "{}Results{}", p.heading, p.reset);
    let metrics = [
        ("Annual Energy Demand (MWh)", result.annual_energy_mwh),
        ("Average Power Demand (kW)", result.average_power_kw),
        ("Peak Power Demand (MW)", result.peak_power_mw),
    ];
    for (label, value) in metrics {
        let _ = writeln!(
            out,
            "  {}{label}:{} {}{}{}",
            p.label,
            p.reset,
            p.metric,
            format_decimal(value, METRIC_PRECISION),
            p.reset
        );
    }
    let _ = writeln!(
        out,
        "  {}{} electric flights per year, {} kWh per flight{}",
        p.muted,
        format_decimal(result.annual_electric_flights, 0),
        format_decimal(result.flight.energy_per_flight_kwh, 1),
        p.reset
    );

    if let Some(warning) = &result.capacity_warning {
        out.push('\n');
        out.push_str(&render_warning(warning, p));
    }

    let _ = writeln!(out, "\n{}Assumptions{}", p.heading, p.reset);
    for line in report.assumptions.lines() {
        let _ = writeln!(out, "- {}{}:{} {}", p.label, line.label, p.reset, line.value);
    }
    let _ = writeln!(out, "\n{}Note: {}{}", p.muted, report.assumptions.note, p.reset);

    out
}

fn render_warning(warning: &CapacityWarning, p: &ColorPalette) -> String {
    format!(
        "{}WARN{} {}{}{}\n",
        p.tag_warn, p.reset, p.advisory, warning.message, p.reset
    )
}

/// Render one reference table, or all three when `table` is `None`.
pub fn render_catalog(
    catalog: &ReferenceCatalog,
    table: Option<CatalogTable>,
    palette: &ColorPalette,
) -> String {
    let tables = match table {
        Some(table) => vec![table],
        None => vec![
            CatalogTable::Aircraft,
            CatalogTable::Charging,
            CatalogTable::Scenarios,
        ],
    };

    tables
        .into_iter()
        .map(|table| match table {
            CatalogTable::Aircraft => render_aircraft(catalog.aircraft_profiles(), palette),
            CatalogTable::Charging => render_charging_levels(
                catalog.charging_levels(),
                &catalog.default_charging_level().name,
                palette,
            ),
            CatalogTable::Scenarios => render_scenarios(catalog.scenarios(), palette),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Serialize the selected table(s) as pretty JSON.
pub fn render_catalog_json(
    catalog: &ReferenceCatalog,
    table: Option<CatalogTable>,
) -> serde_json::Result<String> {
    match table {
        None => render_json(catalog),
        Some(CatalogTable::Aircraft) => render_json(catalog.aircraft_profiles()),
        Some(CatalogTable::Charging) => render_json(catalog.charging_levels()),
        Some(CatalogTable::Scenarios) => render_json(catalog.scenarios()),
    }
}

fn render_aircraft(profiles: &[AircraftProfile], p: &ColorPalette) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}Aircraft categories ({}):{}",
        p.heading,
        profiles.len(),
        p.reset
    );
    let _ = writeln!(
        out,
        "{:<18} {:>10} {:>10} {:>12}  Models",
        "Category", "Power kW", "Range mi", "Cruise mph"
    );
    for profile in profiles {
        let _ = writeln!(
            out,
            "{:<18} {:>10} {:>10} {:>12}  {}{}{}",
            profile.category,
            profile.power_demand_kw,
            profile.range_mi,
            profile.cruise_speed_mph,
            p.muted,
            profile.models.join(", "),
            p.reset
        );
    }
    out
}

fn render_charging_levels(levels: &[ChargingLevel], default: &str, p: &ColorPalette) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}Charging levels ({}):{}",
        p.heading,
        levels.len(),
        p.reset
    );
    let _ = writeln!(out, "{:<18} {:>10}  Description", "Level", "Power kW");
    for level in levels {
        let marker = if level.name == default {
            format!(" {}(default){}", p.accent, p.reset)
        } else {
            String::new()
        };
        let _ = writeln!(
            out,
            "{:<18} {:>10}  {}{}",
            level.name,
            format_with_separators(level.power_kw.round() as u64),
            level.description,
            marker
        );
    }
    out
}

fn render_scenarios(scenarios: &[GrowthScenario], p: &ColorPalette) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}Growth scenarios ({}):{}",
        p.heading,
        scenarios.len(),
        p.reset
    );
    let _ = writeln!(
        out,
        "{:<10} {:>12} {:>10} {:>8}",
        "Scenario", "Feasibility", "Adoption", "Years"
    );
    for scenario in scenarios {
        let _ = writeln!(
            out,
            "{:<10} {:>11}% {:>9}% {:>8}",
            scenario.name,
            format_decimal(scenario.feasibility_rate * 100.0, 0),
            format_decimal(scenario.adoption_rate * 100.0, 0),
            scenario.ops_growth_years
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use aerocharge_lib::{build_report, reference_catalog, CalculationInput, DemandConfig};

    fn report(category: &str, level: &str, scenario: &str) -> EstimateReport {
        let catalog = reference_catalog().unwrap();
        let input = CalculationInput {
            category: category.to_string(),
            charging_level: level.to_string(),
            scenario: scenario.to_string(),
            ..CalculationInput::with_defaults(catalog)
        };
        build_report(catalog, &input, &DemandConfig::default()).expect("valid selection")
    }

    #[test]
    fn estimate_text_shows_two_decimal_metrics() {
        let text = render_estimate(
            &report("General Aviation", "Level 3+ (DCFC)", "Medium"),
            &ColorPalette::plain(),
        );
        assert!(text.starts_with("Results\n"));
        assert!(text.contains("Annual Energy Demand (MWh): 59.68"));
        assert!(text.contains("Average Power Demand (kW): 6.81"));
        assert!(text.contains("Peak Power Demand (MW): 0.06"));
        assert!(!text.contains("WARN"));
        assert!(text.contains("- Operation Category: General Aviation"));
        assert!(text.contains("Note: This calculator assumes Level 3+ (DCFC)"));
    }

    #[test]
    fn estimate_text_includes_capacity_warning() {
        let text = render_estimate(
            &report("Air Taxi", "Level 2", "High"),
            &ColorPalette::plain(),
        );
        assert!(text.contains("WARN Selected charging level (Level 2) has a max power of 20 kW"));
    }

    #[test]
    fn plain_palette_emits_no_escape_codes() {
        let text = render_estimate(
            &report("Air Taxi", "Level 2", "High"),
            &ColorPalette::plain(),
        );
        assert!(!text.contains('\x1b'));
    }

    #[test]
    fn catalog_lists_all_tables_in_order() {
        let text = render_catalog(reference_catalog().unwrap(), None, &ColorPalette::plain());
        let aircraft = text.find("Aircraft categories (3):").expect("aircraft table");
        let levels = text.find("Charging levels (3):").expect("charging table");
        let scenarios = text.find("Growth scenarios (3):").expect("scenario table");
        assert!(aircraft < levels && levels < scenarios);
        assert!(text.contains("Level 3+ (DCFC)"));
        assert!(text.contains("(default)"));
    }

    #[test]
    fn single_table_json_is_an_array() {
        let json = render_catalog_json(reference_catalog().unwrap(), Some(CatalogTable::Scenarios))
            .expect("serializable");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        let names: Vec<&str> = value
            .as_array()
            .expect("array")
            .iter()
            .filter_map(|s| s["name"].as_str())
            .collect();
        assert_eq!(names, ["Low", "Medium", "High"]);
    }
}
