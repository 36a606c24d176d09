//! End-to-end estimate: catalog lookups, energy, power and capacity advisory.
//!
//! A Presentation Shell builds a [`CalculationInput`], calls [`estimate`] (or
//! [`build_report`] when it also needs the assumption summary) and renders the
//! result. Nothing here keeps state between calls.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::catalog::{AircraftProfile, ChargingLevel, GrowthScenario, ReferenceCatalog};
use crate::demand::{
    annual_energy, check_capacity, compute_power, validate_charging_window, AnnualEnergy,
    CapacityWarning, DemandConfig, FlightEnergy, DEFAULT_CHARGING_WINDOW_HOURS,
    DEFAULT_NUM_OPERATIONS,
};
use crate::error::Result;
use crate::summary::AssumptionSummary;

/// User selections for a single estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// Aircraft category name.
    pub category: String,
    /// Annual takeoffs plus landings.
    pub num_operations: u64,
    /// Charging level name.
    pub charging_level: String,
    /// Hours per day during which charging takes place (1..=24).
    pub charging_window_hours: u32,
    /// Growth scenario name.
    pub scenario: String,
}

impl CalculationInput {
    /// Input populated with the catalog's defaults: first category, first
    /// scenario, the default charging level, 10,000 operations and an 8 hour window.
    pub fn with_defaults(catalog: &ReferenceCatalog) -> Self {
        Self {
            category: catalog.default_category().category.clone(),
            num_operations: DEFAULT_NUM_OPERATIONS,
            charging_level: catalog.default_charging_level().name.clone(),
            charging_window_hours: DEFAULT_CHARGING_WINDOW_HOURS,
            scenario: catalog.default_scenario().name.clone(),
        }
    }
}

/// Derived estimate values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub annual_energy_mwh: f64,
    pub average_power_kw: f64,
    pub peak_power_mw: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity_warning: Option<CapacityWarning>,
    /// Per-flight profile of the selected aircraft category.
    pub flight: FlightEnergy,
    pub annual_electric_flights: f64,
}

/// Catalog records referenced by an input.
#[derive(Debug, Clone, Copy)]
pub struct Selection<'a> {
    pub aircraft: &'a AircraftProfile,
    pub charging_level: &'a ChargingLevel,
    pub scenario: &'a GrowthScenario,
}

impl<'a> Selection<'a> {
    /// Resolve the names in `input` against `catalog`.
    pub fn resolve(catalog: &'a ReferenceCatalog, input: &CalculationInput) -> Result<Self> {
        Ok(Self {
            aircraft: catalog.aircraft(&input.category)?,
            charging_level: catalog.charging_level(&input.charging_level)?,
            scenario: catalog.scenario(&input.scenario)?,
        })
    }
}

/// Everything a Presentation Shell needs to display one estimate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimateReport {
    pub input: CalculationInput,
    pub result: CalculationResult,
    pub assumptions: AssumptionSummary,
}

/// Run the energy model, the power model and the capacity advisory in sequence.
///
/// # Errors
/// - [`crate::Error::NotFound`] for a category, level or scenario missing from `catalog`
/// - [`crate::Error::InvalidInput`] for a charging window outside `1..=24`, or
///   when the configured factors push a result past the range of `f64`
/// - [`crate::Error::InvalidConfig`] for unusable model constants
pub fn estimate(
    catalog: &ReferenceCatalog,
    input: &CalculationInput,
    config: &DemandConfig,
) -> Result<CalculationResult> {
    let selection = Selection::resolve(catalog, input)?;
    estimate_selection(&selection, input, config)
}

/// Run [`estimate`] and attach the assumption summary and canonical input names.
pub fn build_report(
    catalog: &ReferenceCatalog,
    input: &CalculationInput,
    config: &DemandConfig,
) -> Result<EstimateReport> {
    let selection = Selection::resolve(catalog, input)?;
    let result = estimate_selection(&selection, input, config)?;

    let canonical = CalculationInput {
        category: selection.aircraft.category.clone(),
        num_operations: input.num_operations,
        charging_level: selection.charging_level.name.clone(),
        charging_window_hours: input.charging_window_hours,
        scenario: selection.scenario.name.clone(),
    };
    let assumptions = AssumptionSummary::new(&selection, &canonical, config);

    Ok(EstimateReport {
        input: canonical,
        result,
        assumptions,
    })
}

fn estimate_selection(
    selection: &Selection<'_>,
    input: &CalculationInput,
    config: &DemandConfig,
) -> Result<CalculationResult> {
    validate_charging_window(input.charging_window_hours)?;

    let scenario = selection.scenario;
    let AnnualEnergy {
        flight,
        annual_electric_flights: flights,
        annual_energy_mwh,
    } = annual_energy(
        input.num_operations,
        selection.aircraft,
        scenario.feasibility_rate,
        scenario.adoption_rate,
        config,
    )?;
    let power = compute_power(annual_energy_mwh, input.charging_window_hours, config)?;

    debug!(
        category = %selection.aircraft.category,
        scenario = %scenario.name,
        num_operations = input.num_operations,
        flight_duration_hours = flight.flight_duration_hours,
        energy_per_flight_kwh = flight.energy_per_flight_kwh,
        annual_energy_mwh,
        average_power_kw = power.average_power_kw,
        peak_power_mw = power.peak_power_mw,
        "computed charging demand"
    );

    let capacity_warning = check_capacity(power.peak_power_mw, selection.charging_level);
    if let Some(ref warning) = capacity_warning {
        warn!(
            charging_level = %warning.charging_level,
            rated_power_kw = warning.rated_power_kw,
            peak_power_mw = warning.peak_power_mw,
            "peak demand exceeds charger rating"
        );
    }

    Ok(CalculationResult {
        annual_energy_mwh,
        average_power_kw: power.average_power_kw,
        peak_power_mw: power.peak_power_mw,
        capacity_warning,
        flight,
        annual_electric_flights: flights,
    })
}
