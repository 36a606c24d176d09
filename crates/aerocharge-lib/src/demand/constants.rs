//! Demand model constants.

/// Peak-month demand relative to the annual average (study value).
pub const SEASONALITY_FACTOR: f64 = 1.7;

/// Peak instantaneous draw relative to the average draw of a charging session (study value).
pub const CHARGING_CURVE_FACTOR: f64 = 1.8;

/// Operations per flight; each flight is one takeoff plus one landing.
pub const OPERATIONS_PER_FLIGHT: f64 = 2.0;

pub const HOURS_PER_DAY: f64 = 24.0;
pub const HOURS_PER_YEAR: f64 = 365.0 * HOURS_PER_DAY;
pub const KW_PER_MW: f64 = 1000.0;
pub const KWH_PER_MWH: f64 = 1000.0;

/// Accepted daily charging window, in whole hours.
pub const MIN_CHARGING_WINDOW_HOURS: u32 = 1;
pub const MAX_CHARGING_WINDOW_HOURS: u32 = 24;

pub const DEFAULT_NUM_OPERATIONS: u64 = 10_000;
pub const DEFAULT_CHARGING_WINDOW_HOURS: u32 = 8;
