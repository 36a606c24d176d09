//! Prometheus metrics for the services.
//!
//! - [`MetricsConfig`]: `METRICS_ENABLED` / `METRICS_PATH`
//! - [`init_metrics`]: install the global recorder
//! - [`metrics_handler`]: render the exposition text
//! - business helpers for estimates
//!
//! ```no_run
//! use aerocharge_service_shared::metrics::{init_metrics, metrics_handler, MetricsConfig};
//! use axum::{routing::get, Router};
//!
//! let config = MetricsConfig::default();
//! init_metrics(&config).expect("failed to initialize metrics");
//! let app: Router = Router::new().route(&config.path, get(metrics_handler));
//! ```

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Global Prometheus handle for rendering metrics.
static PROMETHEUS_HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsConfig {
    pub enabled: bool,
    /// Route of the exposition endpoint.
    pub path: String,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: "/metrics".to_string(),
        }
    }
}

impl MetricsConfig {
    /// - `METRICS_ENABLED`: anything but "false" enables (default: true)
    /// - `METRICS_PATH`: endpoint route (default: "/metrics")
    pub fn from_env() -> Self {
        let enabled = std::env::var("METRICS_ENABLED")
            .map(|v| !v.trim().eq_ignore_ascii_case("false"))
            .unwrap_or(true);

        let path = std::env::var("METRICS_PATH")
            .ok()
            .filter(|p| p.starts_with('/'))
            .unwrap_or_else(|| "/metrics".to_string());

        Self { enabled, path }
    }
}

/// Install the Prometheus recorder. Must run before any metric is recorded.
///
/// # Errors
///
/// - [`MetricsError::Disabled`] when the configuration turns metrics off
/// - [`MetricsError::AlreadyInitialized`] on a second call
/// - [`MetricsError::InstallFailed`] when the exporter cannot install
pub fn init_metrics(config: &MetricsConfig) -> Result<(), MetricsError> {
    if !config.enabled {
        return Err(MetricsError::Disabled);
    }
    if PROMETHEUS_HANDLE.get().is_some() {
        return Err(MetricsError::AlreadyInitialized);
    }

    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| MetricsError::InstallFailed(e.to_string()))?;

    PROMETHEUS_HANDLE
        .set(handle)
        .map_err(|_| MetricsError::AlreadyInitialized)
}

/// `None` until [`init_metrics`] succeeds.
pub fn prometheus_handle() -> Option<&'static PrometheusHandle> {
    PROMETHEUS_HANDLE.get()
}

/// Axum handler returning Prometheus exposition text.
pub async fn metrics_handler() -> String {
    prometheus_handle()
        .map(|h| h.render())
        .unwrap_or_else(|| "# Metrics not initialized\n".to_string())
}

#[derive(Debug, Clone, Error)]
pub enum MetricsError {
    #[error("metrics are disabled")]
    Disabled,
    #[error("metrics recorder already initialized")]
    AlreadyInitialized,
    #[error("failed to install metrics recorder: {0}")]
    InstallFailed(String),
}

// =============================================================================
// Business Metrics Helpers
// =============================================================================

/// Increment `aerocharge_estimates_calculated_total{category,scenario}`.
pub fn record_estimate_calculated(category: &str, scenario: &str) {
    metrics::counter!(
        "aerocharge_estimates_calculated_total",
        "category" => category.to_string(),
        "scenario" => scenario.to_string()
    )
    .increment(1);
}

/// Increment `aerocharge_estimates_failed_total{reason}`.
///
/// `reason` is a fixed label such as "validation_error" or "unknown_category".
pub fn record_estimate_failed(reason: &str) {
    metrics::counter!(
        "aerocharge_estimates_failed_total",
        "reason" => reason.to_string()
    )
    .increment(1);
}

/// Increment `aerocharge_capacity_warnings_total{charging_level}`.
pub fn record_capacity_warning(charging_level: &str) {
    metrics::counter!(
        "aerocharge_capacity_warnings_total",
        "charging_level" => charging_level.to_string()
    )
    .increment(1);
}

/// Record an estimate's peak demand in the `aerocharge_peak_power_mw` histogram.
pub fn record_peak_power(peak_power_mw: f64) {
    metrics::histogram!("aerocharge_peak_power_mw").record(peak_power_mw);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_enables_metrics() {
        let config = MetricsConfig::default();
        assert!(config.enabled);
        assert_eq!(config.path, "/metrics");
    }

    #[test]
    fn disabled_config_is_rejected() {
        let config = MetricsConfig {
            enabled: false,
            ..MetricsConfig::default()
        };
        assert!(matches!(init_metrics(&config), Err(MetricsError::Disabled)));
    }

    #[tokio::test]
    async fn handler_renders_without_recorder() {
        let output = metrics_handler().await;
        assert!(output.starts_with('#') || output.is_empty() || output.contains("aerocharge_"));
    }

    // Without an installed recorder the macros are no-ops; these only prove the
    // helpers accept their labels.
    #[test]
    fn business_helpers_record_without_recorder() {
        record_estimate_calculated("General Aviation", "Medium");
        record_estimate_failed("validation_error");
        record_capacity_warning("Level 2");
        record_peak_power(3.71);
    }

    #[test]
    fn error_messages() {
        assert_eq!(MetricsError::Disabled.to_string(), "metrics are disabled");
        assert_eq!(
            MetricsError::AlreadyInitialized.to_string(),
            "metrics recorder already initialized"
        );
        assert!(MetricsError::InstallFailed("boom".to_string())
            .to_string()
            .contains("boom"));
    }
}
