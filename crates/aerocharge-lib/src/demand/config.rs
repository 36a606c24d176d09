//! Tunable constants of the demand model.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::constants::{CHARGING_CURVE_FACTOR, OPERATIONS_PER_FLIGHT, SEASONALITY_FACTOR};

/// Demand model configuration.
///
/// The defaults are the multipliers asserted by the feasibility study; they
/// are treated as configuration rather than derived values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DemandConfig {
    /// Multiplier from annual-average to peak-month demand.
    pub seasonality_factor: f64,
    /// Multiplier from average to peak draw within a charging session.
    pub charging_curve_factor: f64,
    /// Number of operations (takeoffs and landings) that make up one flight.
    pub operations_per_flight: f64,
}

impl Default for DemandConfig {
    fn default() -> Self {
        Self {
            seasonality_factor: SEASONALITY_FACTOR,
            charging_curve_factor: CHARGING_CURVE_FACTOR,
            operations_per_flight: OPERATIONS_PER_FLIGHT,
        }
    }
}

impl DemandConfig {
    /// Validate the configuration.
    ///
    /// Both peak multipliers must be finite and at least 1.0; a peak below
    /// the average is not a peak. `operations_per_flight` must be finite and
    /// positive.
    pub fn validate(&self) -> Result<()> {
        let multipliers = [
            (self.seasonality_factor, "seasonality_factor"),
            (self.charging_curve_factor, "charging_curve_factor"),
        ];

        for (value, field) in multipliers {
            if !value.is_finite() || value < 1.0 {
                return Err(Error::InvalidConfig {
                    message: format!(
                        "{field} must be a finite number of at least 1, got {value}"
                    ),
                });
            }
        }

        if !self.operations_per_flight.is_finite() || self.operations_per_flight <= 0.0 {
            return Err(Error::InvalidConfig {
                message: format!(
                    "operations_per_flight must be a finite positive number, got {}",
                    self.operations_per_flight
                ),
            });
        }

        Ok(())
    }
}
