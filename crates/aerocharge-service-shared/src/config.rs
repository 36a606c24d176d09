//! Service configuration from environment variables.
//!
//! - `SERVICE_PORT`: listening port (default: 8080)
//! - `AEROCHARGE_SEASONALITY_FACTOR`: overrides the peak-month multiplier
//! - `AEROCHARGE_CHARGING_CURVE_FACTOR`: overrides the peak-draw multiplier
//! - `AEROCHARGE_OPERATIONS_PER_FLIGHT`: overrides operations per flight
//!
//! Unset or empty variables keep their defaults. Values that do not parse, or
//! that produce an invalid [`DemandConfig`], are startup errors.

use thiserror::Error;

use aerocharge_lib::{DemandConfig, Error as LibError};

pub const DEFAULT_SERVICE_PORT: u16 = 8080;

const PORT_VAR: &str = "SERVICE_PORT";
const SEASONALITY_VAR: &str = "AEROCHARGE_SEASONALITY_FACTOR";
const CHARGING_CURVE_VAR: &str = "AEROCHARGE_CHARGING_CURVE_FACTOR";
const OPERATIONS_PER_FLIGHT_VAR: &str = "AEROCHARGE_OPERATIONS_PER_FLIGHT";

/// Errors raised while reading the service configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} must be a valid {expected}, got '{value}'")]
    Parse {
        key: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error(transparent)]
    Demand(#[from] LibError),
}

/// Port and demand model settings of an estimate service.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub port: u16,
    pub demand: DemandConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_SERVICE_PORT,
            demand: DemandConfig::default(),
        }
    }
}

impl ServiceConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let read = |key: &'static str| lookup(key).filter(|value| !value.trim().is_empty());

        let port = match read(PORT_VAR) {
            Some(value) => parse(PORT_VAR, "port number", &value)?,
            None => defaults.port,
        };

        let mut demand = defaults.demand;
        let overrides = [
            (SEASONALITY_VAR, &mut demand.seasonality_factor),
            (CHARGING_CURVE_VAR, &mut demand.charging_curve_factor),
            (OPERATIONS_PER_FLIGHT_VAR, &mut demand.operations_per_flight),
        ];
        for (key, field) in overrides {
            if let Some(value) = read(key) {
                *field = parse(key, "number", &value)?;
            }
        }
        demand.validate()?;

        Ok(Self { port, demand })
    }
}

fn parse<T: std::str::FromStr>(
    key: &'static str,
    expected: &'static str,
    value: &str,
) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Parse {
        key,
        expected,
        value: value.to_string(),
    })
}
