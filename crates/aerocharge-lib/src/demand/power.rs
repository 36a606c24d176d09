//! Average and peak power demand.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::config::DemandConfig;
use super::constants::{
    HOURS_PER_DAY, HOURS_PER_YEAR, KWH_PER_MWH, KW_PER_MW, MAX_CHARGING_WINDOW_HOURS,
    MIN_CHARGING_WINDOW_HOURS,
};

/// Power draw implied by an annual energy figure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerDemand {
    /// Annual energy spread evenly over every hour of the year.
    pub average_power_kw: f64,
    /// Worst-case draw once seasonality, charging curve and the daily window are applied.
    pub peak_power_mw: f64,
}

/// Convert annual energy into average and peak power.
///
/// Formula:
/// - average_power_kw = annual_energy_mwh × 1000 / (365 × 24)
/// - peak_power_mw = average_power_kw × seasonality × charging_curve
///   × (24 / charging_window_hours) / 1000
///
/// Compressing all charging into a shorter daily window raises the draw
/// proportionally, so peak power never increases as the window widens.
///
/// # Errors
/// Returns [`Error::InvalidInput`] when `charging_window_hours` is outside
/// `1..=24`, `annual_energy_mwh` is negative or non-finite, or either power
/// figure overflows.
pub fn compute_power(
    annual_energy_mwh: f64,
    charging_window_hours: u32,
    config: &DemandConfig,
) -> Result<PowerDemand> {
    config.validate()?;
    validate_charging_window(charging_window_hours)?;

    if !annual_energy_mwh.is_finite() || annual_energy_mwh < 0.0 {
        return Err(Error::invalid_input(format!(
            "annual_energy_mwh must be finite and non-negative, got {annual_energy_mwh}"
        )));
    }

    let average_power_kw = (annual_energy_mwh * KWH_PER_MWH) / HOURS_PER_YEAR;
    let window_concentration = HOURS_PER_DAY / f64::from(charging_window_hours);
    let peak_power_mw = average_power_kw
        * config.seasonality_factor
        * config.charging_curve_factor
        * window_concentration
        / KW_PER_MW;

    for (value, field) in [
        (average_power_kw, "average_power_kw"),
        (peak_power_mw, "peak_power_mw"),
    ] {
        if !value.is_finite() {
            return Err(Error::invalid_input(format!(
                "{field} is not a finite number; the demand factors are too large"
            )));
        }
    }

    Ok(PowerDemand {
        average_power_kw,
        peak_power_mw,
    })
}

/// Ensure a daily charging window lies within `1..=24` hours.
pub fn validate_charging_window(charging_window_hours: u32) -> Result<()> {
    if !(MIN_CHARGING_WINDOW_HOURS..=MAX_CHARGING_WINDOW_HOURS).contains(&charging_window_hours) {
        return Err(Error::invalid_input(format!(
            "charging_window_hours must be between {} and {}, got {}",
            MIN_CHARGING_WINDOW_HOURS, MAX_CHARGING_WINDOW_HOURS, charging_window_hours
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spreads_energy_over_the_year() {
        let demand = compute_power(87.6, 24, &DemandConfig::default()).expect("valid");
        assert!((demand.average_power_kw - 10.0).abs() < 1e-9);
        // 10 kW × 1.7 × 1.8 × 1 / 1000
        assert!((demand.peak_power_mw - 0.0306).abs() < 1e-12);
    }

    #[test]
    fn rejects_zero_hour_window() {
        let err = compute_power(59.68, 0, &DemandConfig::default()).expect_err("window of 0");
        match err {
            Error::InvalidInput { message } => {
                assert!(message.contains("charging_window_hours"))
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn rejects_window_longer_than_a_day() {
        assert!(compute_power(1.0, 25, &DemandConfig::default()).is_err());
    }

    #[test]
    fn rejects_negative_energy() {
        assert!(compute_power(-1.0, 8, &DemandConfig::default()).is_err());
    }

    #[test]
    fn custom_factors_scale_peak_only() {
        let base = compute_power(100.0, 8, &DemandConfig::default()).unwrap();
        let flat = DemandConfig {
            seasonality_factor: 1.0,
            charging_curve_factor: 1.0,
            ..DemandConfig::default()
        };
        let flattened = compute_power(100.0, 8, &flat).unwrap();
        assert_eq!(base.average_power_kw, flattened.average_power_kw);
        assert!((base.peak_power_mw / flattened.peak_power_mw - 3.06).abs() < 1e-9);
    }

    #[test]
    fn rejects_peak_that_overflows() {
        let config = DemandConfig {
            seasonality_factor: 1e308,
            ..DemandConfig::default()
        };
        let err = compute_power(59.68, 8, &config).expect_err("peak is infinite");
        match err {
            Error::InvalidInput { message } => assert!(message.contains("peak_power_mw")),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
