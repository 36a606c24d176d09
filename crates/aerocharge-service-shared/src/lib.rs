//! Shared infrastructure for the aerocharge HTTP services.
//!
//! - [`AppState`]: the immutable reference catalog and demand configuration
//! - [`ServiceConfig`]: port and model overrides read from the environment
//! - [`health`]: liveness and readiness probes
//! - [`ProblemDetails`]: RFC 9457 error bodies
//! - [`ServiceResponse`]: success wrapper carrying a content type
//! - [`metrics`]: Prometheus recorder and business metric helpers
//! - [`logging`]: JSON or text `tracing` setup
//! - [`middleware`]: request id propagation and HTTP metrics
//! - [`EstimateRequest`]: request body of the estimate endpoint
//!
//! Handlers stay thin: parse, validate, call `aerocharge-lib`, wrap the result.
//! No calculation happens in this crate.
//!
//! # Testing Support
//!
//! The [`test_utils`] module provides a ready [`AppState`] and request
//! builders. Enable the `test-utils` feature to use it from dependent crates.

#![deny(warnings)]

mod config;
mod health;
pub mod logging;
pub mod metrics;
pub mod middleware;
mod problem;
mod request;
mod response;
mod state;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::{ConfigError, ServiceConfig};
pub use health::{health_live, health_ready, HealthStatus};
pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use metrics::{
    init_metrics, metrics_handler, record_capacity_warning, record_estimate_calculated,
    record_estimate_failed, record_peak_power, MetricsConfig, MetricsError,
};
pub use middleware::{extract_or_generate_request_id, MetricsLayer, RequestId};
pub use problem::{
    failure_reason, from_lib_error, ProblemDetails, PROBLEM_INTERNAL_ERROR,
    PROBLEM_INVALID_REQUEST, PROBLEM_UNKNOWN_CATALOG_ENTRY,
};
pub use request::{EstimateRequest, Validate};
pub use response::ServiceResponse;
pub use state::AppState;
