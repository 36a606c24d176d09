//! RFC 9457 Problem Details for HTTP APIs.
//!
//! See: <https://www.rfc-editor.org/rfc/rfc9457.html>

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use aerocharge_lib::{CatalogKind, Error as LibError};

/// Problem type URI for category, charging level or scenario names missing from the catalog.
pub const PROBLEM_UNKNOWN_CATALOG_ENTRY: &str = "/problems/unknown-catalog-entry";

/// Problem type URI for invalid request parameters.
pub const PROBLEM_INVALID_REQUEST: &str = "/problems/invalid-request";

/// Problem type URI for internal server errors.
pub const PROBLEM_INTERNAL_ERROR: &str = "/problems/internal-error";

/// RFC 9457 Problem Details response structure.
///
/// # Example
///
/// ```
/// use aerocharge_service_shared::{ProblemDetails, PROBLEM_UNKNOWN_CATALOG_ENTRY};
/// use axum::http::StatusCode;
///
/// let problem = ProblemDetails::new(
///     PROBLEM_UNKNOWN_CATALOG_ENTRY,
///     "Unknown Catalog Entry",
///     StatusCode::NOT_FOUND,
/// )
/// .with_detail("Charging level 'Level 4' not found")
/// .with_request_id("req-12345");
/// assert_eq!(problem.status, 404);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemDetails {
    /// URI reference identifying the problem type (relative).
    #[serde(rename = "type")]
    pub type_uri: String,

    /// Short, human-readable summary of the problem.
    pub title: String,

    /// HTTP status code for this problem.
    pub status: u16,

    /// Human-readable explanation specific to this occurrence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// Request identifier of this occurrence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,

    /// Extension member: close catalog names for an unknown entry.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,

    /// Always "application/problem+json".
    pub content_type: String,
}

impl ProblemDetails {
    /// Create a new ProblemDetails with required fields.
    pub fn new(type_uri: impl Into<String>, title: impl Into<String>, status: StatusCode) -> Self {
        Self {
            type_uri: type_uri.into(),
            title: title.into(),
            status: status.as_u16(),
            detail: None,
            instance: None,
            suggestions: Vec::new(),
            content_type: "application/problem+json".to_string(),
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.instance = Some(request_id.into());
        self
    }

    /// 400 Bad Request for invalid input.
    pub fn bad_request(detail: impl Into<String>, request_id: impl Into<String>) -> Self {
        Self::new(
            PROBLEM_INVALID_REQUEST,
            "Invalid Request",
            StatusCode::BAD_REQUEST,
        )
        .with_detail(detail)
        .with_request_id(request_id)
    }

    /// 404 Not Found for a name missing from one of the reference tables.
    pub fn unknown_catalog_entry(
        kind: CatalogKind,
        name: &str,
        suggestions: &[String],
        request_id: impl Into<String>,
    ) -> Self {
        let subject = capitalize(kind.label());
        let detail = if suggestions.is_empty() {
            format!("{subject} '{name}' not found")
        } else {
            format!(
                "{subject} '{name}' not found. Did you mean: {}?",
                suggestions.join(", ")
            )
        };

        let mut problem = Self::new(
            PROBLEM_UNKNOWN_CATALOG_ENTRY,
            "Unknown Catalog Entry",
            StatusCode::NOT_FOUND,
        )
        .with_detail(detail)
        .with_request_id(request_id);
        problem.suggestions = suggestions.to_vec();
        problem
    }

    /// 500 Internal Server Error.
    pub fn internal_error(detail: impl Into<String>, request_id: impl Into<String>) -> Self {
        Self::new(
            PROBLEM_INTERNAL_ERROR,
            "Internal Error",
            StatusCode::INTERNAL_SERVER_ERROR,
        )
        .with_detail(detail)
        .with_request_id(request_id)
    }
}

impl std::fmt::Display for ProblemDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}",
            self.title,
            self.detail.as_deref().unwrap_or("")
        )
    }
}

impl std::error::Error for ProblemDetails {}

impl IntoResponse for ProblemDetails {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let mut response = Json(&self).into_response();
        response.headers_mut().insert(
            axum::http::header::CONTENT_TYPE,
            axum::http::HeaderValue::from_static("application/problem+json"),
        );
        *response.status_mut() = status;
        response
    }
}

/// Convert a library error to ProblemDetails.
///
/// Unknown names map to 404, out-of-range inputs to 400 and everything else
/// (reference data or configuration faults) to 500.
pub fn from_lib_error(error: &LibError, request_id: &str) -> ProblemDetails {
    match error {
        LibError::NotFound {
            kind,
            name,
            suggestions,
        } => ProblemDetails::unknown_catalog_entry(*kind, name, suggestions, request_id),
        LibError::InvalidInput { message } => {
            ProblemDetails::bad_request(message.clone(), request_id)
        }
        _ => ProblemDetails::internal_error(error.to_string(), request_id),
    }
}

/// Metric label describing why an estimate failed.
pub fn failure_reason(error: &LibError) -> &'static str {
    match error {
        LibError::NotFound { kind, .. } => match kind {
            CatalogKind::AircraftCategory => "unknown_category",
            CatalogKind::ChargingLevel => "unknown_charging_level",
            CatalogKind::GrowthScenario => "unknown_scenario",
        },
        LibError::InvalidInput { .. } => "invalid_input",
        _ => "internal_error",
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn not_found(kind: CatalogKind, name: &str, suggestions: &[&str]) -> LibError {
        LibError::NotFound {
            kind,
            name: name.to_string(),
            suggestions: suggestions.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn bad_request_carries_request_id() {
        let problem = ProblemDetails::bad_request("Invalid JSON", "req-123");
        assert_eq!(problem.status, 400);
        assert_eq!(problem.type_uri, PROBLEM_INVALID_REQUEST);
        assert_eq!(problem.instance.as_deref(), Some("req-123"));
    }

    #[test]
    fn unknown_entry_lists_suggestions() {
        let suggestions = vec!["Air Taxi".to_string()];
        let problem = ProblemDetails::unknown_catalog_entry(
            CatalogKind::AircraftCategory,
            "Air Taxii",
            &suggestions,
            "req-456",
        );

        assert_eq!(problem.status, 404);
        assert_eq!(
            problem.detail.as_deref(),
            Some("Aircraft category 'Air Taxii' not found. Did you mean: Air Taxi?")
        );
        assert_eq!(problem.suggestions, suggestions);
    }

    #[test]
    fn unknown_entry_without_suggestions_omits_hint() {
        let problem =
            ProblemDetails::unknown_catalog_entry(CatalogKind::GrowthScenario, "Zzz", &[], "req");
        let detail = problem.detail.as_deref().unwrap_or_default();
        assert_eq!(detail, "Growth scenario 'Zzz' not found");

        let json = serde_json::to_string(&problem).expect("serializable");
        assert!(!json.contains("suggestions"));
    }

    #[test]
    fn serialization_uses_rfc_member_names() {
        let problem = ProblemDetails::bad_request("Test error", "req-test");
        let json = serde_json::to_string(&problem).expect("serializable");

        assert!(json.contains("\"type\":\"/problems/invalid-request\""));
        assert!(json.contains("\"title\":\"Invalid Request\""));
        assert!(json.contains("\"status\":400"));
        assert!(json.contains("\"instance\":\"req-test\""));
    }

    #[test]
    fn lib_errors_map_to_status_codes() {
        let unknown = not_found(CatalogKind::ChargingLevel, "Level 4", &[]);
        assert_eq!(from_lib_error(&unknown, "r").status, 404);

        let invalid = LibError::InvalidInput {
            message: "charging window must be between 1 and 24 hours, got 0".to_string(),
        };
        let problem = from_lib_error(&invalid, "r");
        assert_eq!(problem.status, 400);
        assert!(problem.detail.as_deref().unwrap_or_default().contains("charging window"));

        let config = LibError::InvalidConfig {
            message: "seasonality_factor must be a finite number of at least 1, got 0".to_string(),
        };
        assert_eq!(from_lib_error(&config, "r").status, 500);
    }

    #[test]
    fn failure_reasons_name_the_table() {
        assert_eq!(
            failure_reason(&not_found(CatalogKind::AircraftCategory, "x", &[])),
            "unknown_category"
        );
        assert_eq!(
            failure_reason(&not_found(CatalogKind::GrowthScenario, "x", &[])),
            "unknown_scenario"
        );
        assert_eq!(
            failure_reason(&LibError::InvalidInput {
                message: String::new()
            }),
            "invalid_input"
        );
    }
}
