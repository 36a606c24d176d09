//! Electric aircraft charging demand HTTP microservice.
//!
//! # Endpoints
//!
//! - `POST /api/v1/estimate` - Energy, power and capacity advisory for one selection
//! - `GET /api/v1/catalog` - Aircraft categories, charging levels and growth scenarios
//! - `GET /metrics` - Prometheus metrics (path configurable)
//! - `GET /health/live` - Kubernetes liveness probe
//! - `GET /health/ready` - Kubernetes readiness probe

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, Method, StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use serde::Serialize;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

use aerocharge_lib::{EstimateReport, ReferenceCatalog, build_report};
use aerocharge_service_shared::{
    AppState, EstimateRequest, MetricsLayer, ProblemDetails, ServiceResponse, Validate,
    extract_or_generate_request_id, failure_reason, from_lib_error, health_live, health_ready,
    metrics_handler, record_capacity_warning, record_estimate_calculated, record_estimate_failed,
    record_peak_power,
};

/// HTTP response - either success or RFC 9457 error.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum EstimateResponse {
    Success(Box<ServiceResponse<EstimateReport>>),
    Error(ProblemDetails),
}

impl IntoResponse for EstimateResponse {
    fn into_response(self) -> axum::response::Response {
        match self {
            EstimateResponse::Success(data) => (StatusCode::OK, Json(data)).into_response(),
            EstimateResponse::Error(problem) => problem.into_response(),
        }
    }
}

/// Assemble the service router; `metrics_path` is where Prometheus text is served.
pub fn build_router(state: AppState, metrics_path: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/api/v1/estimate", post(estimate_handler))
        .route("/api/v1/catalog", get(catalog_handler))
        .route(metrics_path, get(metrics_handler))
        .route("/health/live", get(health_live))
        .route("/health/ready", get(health_ready))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(MetricsLayer)
        .with_state(state)
}

/// Handle POST /api/v1/estimate requests.
async fn estimate_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<EstimateRequest>, JsonRejection>,
) -> EstimateResponse {
    let request_id = extract_or_generate_request_id(&headers);
    let request_id = request_id.as_str();

    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            record_estimate_failed("invalid_body");
            return EstimateResponse::Error(ProblemDetails::bad_request(
                rejection.body_text(),
                request_id,
            ));
        }
    };

    info!(request_id, request = ?request, "handling estimate request");

    if let Err(problem) = request.validate(request_id) {
        record_estimate_failed("validation_error");
        return EstimateResponse::Error(*problem);
    }

    let input = match request.to_input(state.catalog(), request_id) {
        Ok(input) => input,
        Err(problem) => {
            record_estimate_failed("validation_error");
            return EstimateResponse::Error(*problem);
        }
    };

    let report = match build_report(state.catalog(), &input, state.config()) {
        Ok(report) => report,
        Err(e) => {
            warn!(request_id, error = %e, "estimate failed");
            record_estimate_failed(failure_reason(&e));
            return EstimateResponse::Error(from_lib_error(&e, request_id));
        }
    };

    let result = &report.result;
    record_estimate_calculated(&report.input.category, &report.input.scenario);
    record_peak_power(result.peak_power_mw);
    if let Some(warning) = &result.capacity_warning {
        record_capacity_warning(&warning.charging_level);
    }

    info!(
        request_id,
        annual_energy_mwh = result.annual_energy_mwh,
        average_power_kw = result.average_power_kw,
        peak_power_mw = result.peak_power_mw,
        capacity_warning = result.capacity_warning.is_some(),
        "estimate computed"
    );

    EstimateResponse::Success(Box::new(ServiceResponse::new(report)))
}

/// Handle GET /api/v1/catalog requests.
async fn catalog_handler(
    State(state): State<AppState>,
) -> ServiceResponse<&'static ReferenceCatalog> {
    ServiceResponse::new(state.catalog())
}
