//! Reference records for aircraft categories, charging levels and growth scenarios.
//!
//! Each record validates its own numeric fields; the catalog calls these
//! validators when it is assembled from caller-supplied tables.

use serde::{Deserialize, Serialize};

use crate::error::{CatalogKind, Error, Result};

/// Shared behaviour of rows stored in the reference catalog.
pub trait CatalogEntry {
    /// Table this entry belongs to.
    const KIND: CatalogKind;

    /// Canonical display name, also used as the lookup key.
    fn name(&self) -> &str;

    /// Validate the entry's fields.
    fn validate(&self) -> Result<()>;
}

/// Electric aircraft category with representative performance figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftProfile {
    pub category: String,
    /// Representative aircraft models for the category.
    pub models: Vec<String>,
    /// Average electrical draw in flight (kW).
    pub power_demand_kw: f64,
    pub range_mi: f64,
    pub cruise_speed_mph: f64,
}

impl CatalogEntry for AircraftProfile {
    const KIND: CatalogKind = CatalogKind::AircraftCategory;

    fn name(&self) -> &str {
        &self.category
    }

    fn validate(&self) -> Result<()> {
        ensure_named(Self::KIND, &self.category)?;

        let fields = [
            (self.power_demand_kw, "power_demand_kw"),
            (self.range_mi, "range_mi"),
            (self.cruise_speed_mph, "cruise_speed_mph"),
        ];

        for (value, field) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::CatalogValidation {
                    message: format!(
                        "{field} for '{}' must be a finite positive number",
                        self.category
                    ),
                });
            }
        }

        Ok(())
    }
}

/// Charger class available at the airport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChargingLevel {
    pub name: String,
    /// Rated output of a single charger (kW).
    pub power_kw: f64,
    pub description: String,
}

impl CatalogEntry for ChargingLevel {
    const KIND: CatalogKind = CatalogKind::ChargingLevel;

    fn name(&self) -> &str {
        &self.name
    }

    fn validate(&self) -> Result<()> {
        ensure_named(Self::KIND, &self.name)?;

        if !self.power_kw.is_finite() || self.power_kw <= 0.0 {
            return Err(Error::CatalogValidation {
                message: format!(
                    "power_kw for '{}' must be a finite positive number",
                    self.name
                ),
            });
        }

        Ok(())
    }
}

/// Adoption scenario describing how much of the traffic electrifies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthScenario {
    pub name: String,
    /// Fraction of operations that could be flown electrically.
    pub feasibility_rate: f64,
    /// Fraction of feasible operations that actually are.
    pub adoption_rate: f64,
    /// Years over which the scenario's operations growth plays out.
    ///
    /// Informational only; no formula consumes it.
    pub ops_growth_years: u32,
}

impl CatalogEntry for GrowthScenario {
    const KIND: CatalogKind = CatalogKind::GrowthScenario;

    fn name(&self) -> &str {
        &self.name
    }

    fn validate(&self) -> Result<()> {
        ensure_named(Self::KIND, &self.name)?;

        let rates = [
            (self.feasibility_rate, "feasibility_rate"),
            (self.adoption_rate, "adoption_rate"),
        ];

        for (value, field) in rates {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(Error::CatalogValidation {
                    message: format!("{field} for '{}' must be between 0 and 1", self.name),
                });
            }
        }

        if self.ops_growth_years == 0 {
            return Err(Error::CatalogValidation {
                message: format!("ops_growth_years for '{}' must be positive", self.name),
            });
        }

        Ok(())
    }
}

fn ensure_named(kind: CatalogKind, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::CatalogValidation {
            message: format!("{kind} name must not be empty"),
        });
    }
    Ok(())
}
