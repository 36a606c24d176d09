//! Aerocharge library entry points.
//!
//! This crate turns assumptions about electric-aircraft operations into the
//! annual energy, average power and peak power an airport's charging
//! infrastructure must supply. Higher-level consumers (CLI, HTTP service)
//! should only depend on the functions exported here instead of reimplementing
//! behavior.
//!
//! # Example
//!
//! ```
//! use aerocharge_lib::{build_report, reference_catalog, CalculationInput, DemandConfig};
//!
//! let catalog = reference_catalog().unwrap();
//! let input = CalculationInput {
//!     scenario: "Medium".to_string(),
//!     ..CalculationInput::with_defaults(catalog)
//! };
//! let report = build_report(catalog, &input, &DemandConfig::default()).unwrap();
//! assert!((report.result.annual_energy_mwh - 59.68).abs() < 0.01);
//! assert!(report.result.capacity_warning.is_none());
//! ```

#![deny(warnings)]

pub mod catalog;
pub mod demand;
pub mod error;
pub mod estimate;
pub mod summary;

pub use catalog::{
    reference_catalog, AircraftProfile, ChargingLevel, GrowthScenario, ReferenceCatalog,
};
pub use demand::{
    check_capacity, compute_annual_energy, compute_power, CapacityWarning, DemandConfig,
    FlightEnergy, PowerDemand,
};
pub use error::{CatalogKind, Error, Result};
pub use estimate::{
    build_report, estimate, CalculationInput, CalculationResult, EstimateReport, Selection,
};
pub use summary::{AssumptionLine, AssumptionSummary};
