//! Request types and validation for HTTP endpoints.

use serde::{Deserialize, Serialize};

use aerocharge_lib::demand::{MAX_CHARGING_WINDOW_HOURS, MIN_CHARGING_WINDOW_HOURS};
use aerocharge_lib::{CalculationInput, ReferenceCatalog};

use crate::ProblemDetails;

/// Validation trait for request types.
pub trait Validate {
    /// Validate the request, returning a boxed `ProblemDetails` whose
    /// `instance` is `request_id`.
    fn validate(&self, request_id: &str) -> Result<(), Box<ProblemDetails>>;
}

/// Body of `POST /api/v1/estimate`.
///
/// Every field is optional; missing fields take the catalog defaults. Numeric
/// fields are signed so that negative values reach validation instead of
/// failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Annual takeoffs plus landings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_operations: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charging_level: Option<String>,

    /// Daily charging window in hours.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charging_window_hours: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scenario: Option<String>,
}

impl EstimateRequest {
    /// Resolve the request into a calculation input, filling gaps from `catalog`.
    pub fn to_input(
        &self,
        catalog: &ReferenceCatalog,
        request_id: &str,
    ) -> Result<CalculationInput, Box<ProblemDetails>> {
        let defaults = CalculationInput::with_defaults(catalog);
        let bad_request =
            |message: String| Box::new(ProblemDetails::bad_request(message, request_id));

        Ok(CalculationInput {
            category: name_or(&self.category, defaults.category),
            num_operations: self
                .operations()
                .map_err(bad_request)?
                .unwrap_or(defaults.num_operations),
            charging_level: name_or(&self.charging_level, defaults.charging_level),
            charging_window_hours: self
                .window()
                .map_err(bad_request)?
                .unwrap_or(defaults.charging_window_hours),
            scenario: name_or(&self.scenario, defaults.scenario),
        })
    }

    fn operations(&self) -> Result<Option<u64>, String> {
        self.num_operations
            .map(|value| {
                u64::try_from(value).map_err(|_| {
                    format!("The 'num_operations' field must not be negative, got {value}")
                })
            })
            .transpose()
    }

    fn window(&self) -> Result<Option<u32>, String> {
        self.charging_window_hours
            .map(|value| {
                u32::try_from(value)
                    .ok()
                    .filter(|hours| {
                        (MIN_CHARGING_WINDOW_HOURS..=MAX_CHARGING_WINDOW_HOURS).contains(hours)
                    })
                    .ok_or_else(|| {
                        format!(
                            "The 'charging_window_hours' field must be between {} and {}, got {value}",
                            MIN_CHARGING_WINDOW_HOURS, MAX_CHARGING_WINDOW_HOURS
                        )
                    })
            })
            .transpose()
    }
}

impl Validate for EstimateRequest {
    fn validate(&self, request_id: &str) -> Result<(), Box<ProblemDetails>> {
        let names = [
            (&self.category, "category"),
            (&self.charging_level, "charging_level"),
            (&self.scenario, "scenario"),
        ];

        for (value, field) in names {
            if value.as_deref().is_some_and(|name| name.trim().is_empty()) {
                return Err(Box::new(ProblemDetails::bad_request(
                    format!("The '{field}' field cannot be empty when provided"),
                    request_id,
                )));
            }
        }

        for check in [self.operations().map(|_| ()), self.window().map(|_| ())] {
            check.map_err(|message| Box::new(ProblemDetails::bad_request(message, request_id)))?;
        }

        Ok(())
    }
}

fn name_or(value: &Option<String>, default: String) -> String {
    value.clone().unwrap_or(default)
}
