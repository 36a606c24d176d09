//! Reference data: aircraft categories, charging levels and growth scenarios.
//!
//! - [`records`] - Typed rows and their validation rules
//! - [`reference`] - The [`ReferenceCatalog`] and its keyed lookups
//! - `builtin` - Study tables backing [`reference_catalog`]
//!
//! # Example
//!
//! ```
//! use aerocharge_lib::catalog::reference_catalog;
//!
//! let catalog = reference_catalog().unwrap();
//! let taxi = catalog.aircraft("Air Taxi").unwrap();
//! assert_eq!(taxi.power_demand_kw, 680.0);
//! assert_eq!(catalog.default_charging_level().name, "Level 3+ (DCFC)");
//! ```

mod builtin;
pub mod records;
pub mod reference;

pub use builtin::DEFAULT_CHARGING_LEVEL;
pub use records::{AircraftProfile, CatalogEntry, ChargingLevel, GrowthScenario};
pub use reference::{reference_catalog, ReferenceCatalog};
