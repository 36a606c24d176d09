//! Estimate command handler.

use anyhow::{Context, Result};
use clap::Args;

use aerocharge_cli::output::{render_estimate, render_json, OutputFormat};
use aerocharge_cli::terminal::ColorPalette;
use aerocharge_lib::demand::{
    DEFAULT_CHARGING_WINDOW_HOURS, DEFAULT_NUM_OPERATIONS, MAX_CHARGING_WINDOW_HOURS,
    MIN_CHARGING_WINDOW_HOURS,
};
use aerocharge_lib::{
    build_report, reference_catalog, CalculationInput, DemandConfig, ReferenceCatalog,
};

/// Arguments of the `estimate` subcommand.
#[derive(Args, Debug, Clone)]
pub struct EstimateArgs {
    /// Aircraft category (defaults to the first catalog entry).
    #[arg(long)]
    pub category: Option<String>,
    /// Annual takeoffs plus landings.
    #[arg(long, default_value_t = DEFAULT_NUM_OPERATIONS)]
    pub operations: u64,
    /// Charging level (defaults to Level 3+ (DCFC)).
    #[arg(long = "charging-level")]
    pub charging_level: Option<String>,
    /// Daily charging window in hours.
    #[arg(
        long,
        default_value_t = DEFAULT_CHARGING_WINDOW_HOURS,
        value_parser = clap::value_parser!(u32)
            .range(i64::from(MIN_CHARGING_WINDOW_HOURS)..=i64::from(MAX_CHARGING_WINDOW_HOURS))
    )]
    pub window: u32,
    /// Growth scenario (defaults to the first catalog entry).
    #[arg(long)]
    pub scenario: Option<String>,
    /// Override the peak-month seasonality factor.
    #[arg(long)]
    pub seasonality: Option<f64>,
    /// Override the charging curve factor.
    #[arg(long = "charging-curve")]
    pub charging_curve: Option<f64>,
}

impl EstimateArgs {
    /// Build the calculation input, filling unset names from the catalog defaults.
    pub fn to_input(&self, catalog: &ReferenceCatalog) -> CalculationInput {
        let defaults = CalculationInput::with_defaults(catalog);
        CalculationInput {
            category: self.category.clone().unwrap_or(defaults.category),
            num_operations: self.operations,
            charging_level: self
                .charging_level
                .clone()
                .unwrap_or(defaults.charging_level),
            charging_window_hours: self.window,
            scenario: self.scenario.clone().unwrap_or(defaults.scenario),
        }
    }

    /// Default model constants with any command-line overrides applied.
    pub fn demand_config(&self) -> DemandConfig {
        let defaults = DemandConfig::default();
        DemandConfig {
            seasonality_factor: self.seasonality.unwrap_or(defaults.seasonality_factor),
            charging_curve_factor: self
                .charging_curve
                .unwrap_or(defaults.charging_curve_factor),
            ..defaults
        }
    }
}

/// Run an estimate and print it in the requested format.
pub fn handle_estimate(args: &EstimateArgs, format: OutputFormat) -> Result<()> {
    let catalog = reference_catalog().context("failed to load reference catalog")?;
    let input = args.to_input(catalog);
    let config = args.demand_config();

    let report = build_report(catalog, &input, &config)
        .context("failed to estimate charging demand")?;

    match format {
        OutputFormat::Text => print!("{}", render_estimate(&report, &ColorPalette::detect())),
        OutputFormat::Json => {
            let json = render_json(&report).context("failed to serialize estimate")?;
            println!("{json}");
        }
    }

    Ok(())
}
