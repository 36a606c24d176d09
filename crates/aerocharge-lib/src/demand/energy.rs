//! Annual energy demand.
//!
//! Converts an airport's operation count into electrified flights and
//! multiplies by the energy an aircraft of the selected category draws per
//! flight.

use serde::{Deserialize, Serialize};

use crate::catalog::{AircraftProfile, CatalogEntry};
use crate::error::{Error, Result};

use super::config::DemandConfig;
use super::constants::KWH_PER_MWH;

/// Per-flight energy profile derived from an aircraft category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightEnergy {
    /// Time to fly the category's full range at cruise speed.
    pub flight_duration_hours: f64,
    pub energy_per_flight_kwh: f64,
}

/// Energy consumed by one flight of `aircraft`.
///
/// Formula:
/// - flight_duration_hours = range_mi / cruise_speed_mph
/// - energy_per_flight_kwh = power_demand_kw × flight_duration_hours
pub fn flight_energy(aircraft: &AircraftProfile) -> Result<FlightEnergy> {
    aircraft.validate()?;

    let flight_duration_hours = aircraft.range_mi / aircraft.cruise_speed_mph;
    let energy_per_flight_kwh = aircraft.power_demand_kw * flight_duration_hours;

    Ok(FlightEnergy {
        flight_duration_hours,
        energy_per_flight_kwh,
    })
}

/// Number of electric flights per year implied by the operation count and scenario rates.
pub fn annual_electric_flights(
    num_operations: u64,
    feasibility_rate: f64,
    adoption_rate: f64,
    config: &DemandConfig,
) -> Result<f64> {
    config.validate()?;
    validate_rate(feasibility_rate, "feasibility_rate")?;
    validate_rate(adoption_rate, "adoption_rate")?;

    Ok((num_operations as f64 / config.operations_per_flight) * feasibility_rate * adoption_rate)
}

/// Intermediate and final values of the annual energy model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnnualEnergy {
    pub flight: FlightEnergy,
    pub annual_electric_flights: f64,
    pub annual_energy_mwh: f64,
}

/// Annual electrical energy (MWh) needed to serve the electrified flights,
/// together with the per-flight profile and flight count it was derived from.
///
/// Formula:
/// annual_energy_mwh = (num_operations / operations_per_flight) × feasibility_rate
///                     × adoption_rate × energy_per_flight_kwh / 1000
///
/// With the default configuration `operations_per_flight` is 2: every
/// operation is a takeoff or a landing. Zero operations yield zero energy.
///
/// # Errors
/// Returns [`Error::InvalidInput`] when a rate is outside `[0, 1]` or the
/// energy overflows to a non-finite value, [`Error::CatalogValidation`] for
/// an unusable aircraft profile and [`Error::InvalidConfig`] for unusable
/// model constants.
pub fn annual_energy(
    num_operations: u64,
    aircraft: &AircraftProfile,
    feasibility_rate: f64,
    adoption_rate: f64,
    config: &DemandConfig,
) -> Result<AnnualEnergy> {
    let flight = flight_energy(aircraft)?;
    let flights = annual_electric_flights(num_operations, feasibility_rate, adoption_rate, config)?;
    let annual_energy_mwh = flights * flight.energy_per_flight_kwh / KWH_PER_MWH;

    if !annual_energy_mwh.is_finite() {
        return Err(Error::invalid_input(format!(
            "annual energy for {num_operations} operations of '{}' is not a finite number",
            aircraft.category
        )));
    }

    Ok(AnnualEnergy {
        flight,
        annual_electric_flights: flights,
        annual_energy_mwh,
    })
}

/// Annual electrical energy (MWh) only; see [`annual_energy`].
///
/// # Examples
/// ```
/// use aerocharge_lib::catalog::reference_catalog;
/// use aerocharge_lib::demand::{compute_annual_energy, DemandConfig};
///
/// let ga = reference_catalog().unwrap().aircraft("General Aviation").unwrap();
/// let mwh = compute_annual_energy(10_000, ga, 0.5, 0.5, &DemandConfig::default()).unwrap();
/// assert!((mwh - 59.677).abs() < 1e-3);
/// ```
pub fn compute_annual_energy(
    num_operations: u64,
    aircraft: &AircraftProfile,
    feasibility_rate: f64,
    adoption_rate: f64,
    config: &DemandConfig,
) -> Result<f64> {
    annual_energy(num_operations, aircraft, feasibility_rate, adoption_rate, config)
        .map(|energy| energy.annual_energy_mwh)
}

fn validate_rate(value: f64, field: &str) -> Result<()> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(Error::invalid_input(format!(
            "{field} must be between 0 and 1, got {value}"
        )));
    }
    Ok(())
}
