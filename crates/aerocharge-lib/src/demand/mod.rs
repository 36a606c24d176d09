//! Energy and power demand models and the charger capacity advisory.
//!
//! - [`energy`] - Annual energy from operations, aircraft and scenario rates
//! - [`power`] - Average and peak power from annual energy
//! - [`advisory`] - Peak demand versus charger rating
//! - [`config`] - Model constants as configuration
//! - [`constants`] - Study values and unit conversions
//!
//! All functions are pure; the only shared data they read is the immutable
//! reference catalog.

pub mod advisory;
pub mod config;
pub mod constants;
pub mod energy;
pub mod power;

pub use advisory::{check_capacity, CapacityWarning};
pub use config::DemandConfig;
pub use constants::{
    CHARGING_CURVE_FACTOR, DEFAULT_CHARGING_WINDOW_HOURS, DEFAULT_NUM_OPERATIONS,
    MAX_CHARGING_WINDOW_HOURS, MIN_CHARGING_WINDOW_HOURS, OPERATIONS_PER_FLIGHT,
    SEASONALITY_FACTOR,
};
pub use energy::{
    annual_electric_flights, annual_energy, compute_annual_energy, flight_energy, AnnualEnergy,
    FlightEnergy,
};
pub use power::{compute_power, validate_charging_window, PowerDemand};
