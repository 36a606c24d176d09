//! Catalog assembly and keyed lookup.

use std::cmp::Ordering;
use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Serialize, Serializer};

use crate::error::{Error, Result};

use super::builtin;
use super::records::{AircraftProfile, CatalogEntry, ChargingLevel, GrowthScenario};

/// Maximum number of "did you mean" suggestions attached to lookup errors.
const MAX_SUGGESTIONS: usize = 3;

/// Minimum Jaro-Winkler similarity for a name to be suggested.
const SUGGESTION_THRESHOLD: f64 = 0.75;

static REFERENCE_CATALOG: Lazy<Result<ReferenceCatalog>> = Lazy::new(|| {
    ReferenceCatalog::new(
        builtin::aircraft_profiles(),
        builtin::charging_levels(),
        builtin::growth_scenarios(),
        builtin::DEFAULT_CHARGING_LEVEL,
    )
});

/// Process-wide catalog holding the study reference tables.
///
/// The tables are validated on first access; a failure is cached and
/// returned to every caller.
pub fn reference_catalog() -> Result<&'static ReferenceCatalog> {
    REFERENCE_CATALOG.as_ref().map_err(Clone::clone)
}

/// Ordered table with case-insensitive name index.
#[derive(Debug, Clone)]
struct Table<T> {
    entries: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T: CatalogEntry> Table<T> {
    fn from_entries(entries: Vec<T>) -> Result<Self> {
        let mut index = HashMap::with_capacity(entries.len());

        for (position, entry) in entries.iter().enumerate() {
            entry.validate()?;

            let key = normalize_name(entry.name());
            if index.insert(key.clone(), position).is_some() {
                return Err(Error::DuplicateCatalogEntry {
                    kind: T::KIND,
                    name: key,
                });
            }
        }

        if entries.is_empty() {
            return Err(Error::CatalogValidation {
                message: format!("{} table must not be empty", T::KIND),
            });
        }

        Ok(Self { entries, index })
    }

    fn get(&self, name: &str) -> Result<&T> {
        self.index
            .get(&normalize_name(name))
            .map(|&position| &self.entries[position])
            .ok_or_else(|| Error::NotFound {
                kind: T::KIND,
                name: name.trim().to_string(),
                suggestions: self.suggestions(name),
            })
    }

    fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name()).collect()
    }

    fn suggestions(&self, name: &str) -> Vec<String> {
        let needle = normalize_name(name);
        let mut scored: Vec<(f64, &str)> = self
            .entries
            .iter()
            .map(|e| (strsim::jaro_winkler(&needle, &normalize_name(e.name())), e.name()))
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
        scored
            .into_iter()
            .take(MAX_SUGGESTIONS)
            .map(|(_, name)| name.to_string())
            .collect()
    }
}

impl<T: Serialize> Serialize for Table<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

/// Immutable set of aircraft, charging and scenario tables.
///
/// Entries keep their insertion order; the first aircraft category and the
/// first scenario act as defaults for callers that do not choose one.
#[derive(Debug, Clone, Serialize)]
pub struct ReferenceCatalog {
    aircraft: Table<AircraftProfile>,
    charging_levels: Table<ChargingLevel>,
    scenarios: Table<GrowthScenario>,
    #[serde(skip)]
    default_charging_level: usize,
}

impl ReferenceCatalog {
    /// Assemble a catalog from caller-supplied tables, validating every entry.
    ///
    /// `default_charging_level` must name one of `charging_levels`.
    pub fn new(
        aircraft: Vec<AircraftProfile>,
        charging_levels: Vec<ChargingLevel>,
        scenarios: Vec<GrowthScenario>,
        default_charging_level: &str,
    ) -> Result<Self> {
        let aircraft = Table::from_entries(aircraft)?;
        let charging_levels = Table::from_entries(charging_levels)?;
        let scenarios = Table::from_entries(scenarios)?;

        let default_charging_level = charging_levels
            .index
            .get(&normalize_name(default_charging_level))
            .copied()
            .ok_or_else(|| Error::CatalogValidation {
                message: format!(
                    "default charging level '{}' is not in the charging table",
                    default_charging_level
                ),
            })?;

        Ok(Self {
            aircraft,
            charging_levels,
            scenarios,
            default_charging_level,
        })
    }

    /// Look up an aircraft category (case-insensitive).
    pub fn aircraft(&self, category: &str) -> Result<&AircraftProfile> {
        self.aircraft.get(category)
    }

    /// Look up a charging level (case-insensitive).
    pub fn charging_level(&self, name: &str) -> Result<&ChargingLevel> {
        self.charging_levels.get(name)
    }

    /// Look up a growth scenario (case-insensitive).
    pub fn scenario(&self, name: &str) -> Result<&GrowthScenario> {
        self.scenarios.get(name)
    }

    pub fn aircraft_profiles(&self) -> &[AircraftProfile] {
        &self.aircraft.entries
    }

    pub fn charging_levels(&self) -> &[ChargingLevel] {
        &self.charging_levels.entries
    }

    pub fn scenarios(&self) -> &[GrowthScenario] {
        &self.scenarios.entries
    }

    pub fn category_names(&self) -> Vec<&str> {
        self.aircraft.names()
    }

    pub fn charging_level_names(&self) -> Vec<&str> {
        self.charging_levels.names()
    }

    pub fn scenario_names(&self) -> Vec<&str> {
        self.scenarios.names()
    }

    /// First aircraft category in catalog order.
    pub fn default_category(&self) -> &AircraftProfile {
        &self.aircraft.entries[0]
    }

    /// First growth scenario in catalog order.
    pub fn default_scenario(&self) -> &GrowthScenario {
        &self.scenarios.entries[0]
    }

    pub fn default_charging_level(&self) -> &ChargingLevel {
        &self.charging_levels.entries[self.default_charging_level]
    }

    /// Total number of rows across all three tables.
    pub fn entry_count(&self) -> usize {
        self.aircraft.entries.len()
            + self.charging_levels.entries.len()
            + self.scenarios.entries.len()
    }
}

/// Normalize a catalog name for case-insensitive lookup.
fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}
