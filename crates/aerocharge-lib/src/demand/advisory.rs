//! Charger capacity advisory.

use serde::{Deserialize, Serialize};

use crate::catalog::ChargingLevel;

use super::constants::KW_PER_MW;

/// Advisory raised when peak demand exceeds a charger's rated output.
///
/// Informational only: the estimate it accompanies is still valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityWarning {
    pub charging_level: String,
    pub rated_power_kw: f64,
    pub peak_power_mw: f64,
    pub message: String,
}

impl std::fmt::Display for CapacityWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Compare peak demand against the selected charging level.
///
/// Returns a warning when `peak_power_mw` (converted to kW) is strictly
/// greater than the level's rated `power_kw`, `None` otherwise.
///
/// # Examples
/// ```
/// use aerocharge_lib::catalog::reference_catalog;
/// use aerocharge_lib::demand::check_capacity;
///
/// let level_2 = reference_catalog().unwrap().charging_level("Level 2").unwrap();
/// assert!(check_capacity(0.015, level_2).is_none());
///
/// let warning = check_capacity(0.25, level_2).unwrap();
/// assert!(warning.message.contains("20 kW"));
/// assert!(warning.message.contains("0.25 MW"));
/// ```
pub fn check_capacity(peak_power_mw: f64, level: &ChargingLevel) -> Option<CapacityWarning> {
    if peak_power_mw * KW_PER_MW <= level.power_kw {
        return None;
    }

    let message = format!(
        "Selected charging level ({}) has a max power of {} kW, which may limit charging speed for peak demand of {:.2} MW.",
        level.name, level.power_kw, peak_power_mw
    );

    Some(CapacityWarning {
        charging_level: level.name.clone(),
        rated_power_kw: level.power_kw,
        peak_power_mw,
        message,
    })
}
