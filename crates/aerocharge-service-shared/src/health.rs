//! Health check handlers for Kubernetes probes.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::AppState;

/// Health status response for liveness and readiness probes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    /// "ok" or "not_ready: <reason>".
    pub status: String,

    pub service: String,

    pub version: String,

    /// Aircraft categories loaded (readiness only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aircraft_categories: Option<usize>,

    /// Charging levels loaded (readiness only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charging_levels: Option<usize>,

    /// Growth scenarios loaded (readiness only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scenarios: Option<usize>,
}

impl HealthStatus {
    pub fn alive(service: &str, version: &str) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.to_string(),
            version: version.to_string(),
            aircraft_categories: None,
            charging_levels: None,
            scenarios: None,
        }
    }

    /// Ready status with the size of each reference table.
    pub fn ready(service: &str, version: &str, counts: [usize; 3]) -> Self {
        let [aircraft, levels, scenarios] = counts;
        Self {
            aircraft_categories: Some(aircraft),
            charging_levels: Some(levels),
            scenarios: Some(scenarios),
            ..Self::alive(service, version)
        }
    }

    pub fn not_ready(service: &str, version: &str, reason: &str) -> Self {
        Self {
            status: format!("not_ready: {}", reason),
            ..Self::alive(service, version)
        }
    }
}

/// `GET /health/live`: 200 while the process runs.
///
/// ```text
/// {"status":"ok","service":"aerocharge-service-shared","version":"0.1.0"}
/// ```
pub async fn health_live() -> impl IntoResponse {
    let status = HealthStatus::alive(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    (StatusCode::OK, Json(status))
}

/// `GET /health/ready`: 200 once every reference table has entries, 503 otherwise.
///
/// ```text
/// {"status":"ok",...,"aircraft_categories":3,"charging_levels":3,"scenarios":3}
/// ```
pub async fn health_ready(State(state): State<AppState>) -> Response {
    let service = env!("CARGO_PKG_NAME");
    let version = env!("CARGO_PKG_VERSION");

    let catalog = state.catalog();
    let counts = [
        catalog.aircraft_profiles().len(),
        catalog.charging_levels().len(),
        catalog.scenarios().len(),
    ];

    if counts.contains(&0) {
        let status = HealthStatus::not_ready(service, version, "reference catalog incomplete");
        return (StatusCode::SERVICE_UNAVAILABLE, Json(status)).into_response();
    }

    let status = HealthStatus::ready(service, version, counts);
    (StatusCode::OK, Json(status)).into_response()
}
