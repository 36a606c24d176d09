//! Application state shared by axum handlers.

use std::sync::Arc;

use aerocharge_lib::{reference_catalog, DemandConfig, ReferenceCatalog, Result as LibResult};

/// Immutable state for all handlers: the reference catalog and the demand
/// model configuration. Cloning copies an `Arc`.
///
/// ```
/// use aerocharge_lib::DemandConfig;
/// use aerocharge_service_shared::AppState;
///
/// let state = AppState::new(DemandConfig::default()).unwrap();
/// assert_eq!(state.catalog().category_names()[0], "General Aviation");
/// ```
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    catalog: &'static ReferenceCatalog,
    config: DemandConfig,
}

impl AppState {
    /// State over the built-in catalog.
    ///
    /// # Errors
    /// Returns [`aerocharge_lib::Error::InvalidConfig`] when `config` fails validation,
    /// or the catalog's own validation error if the built-in tables are rejected.
    pub fn new(config: DemandConfig) -> LibResult<Self> {
        Self::from_components(reference_catalog()?, config)
    }

    /// State over an arbitrary catalog.
    pub fn from_components(
        catalog: &'static ReferenceCatalog,
        config: DemandConfig,
    ) -> LibResult<Self> {
        config.validate()?;
        tracing::info!(
            entries = catalog.entry_count(),
            seasonality_factor = config.seasonality_factor,
            charging_curve_factor = config.charging_curve_factor,
            operations_per_flight = config.operations_per_flight,
            "application state ready"
        );
        Ok(Self {
            inner: Arc::new(AppStateInner { catalog, config }),
        })
    }

    pub fn catalog(&self) -> &'static ReferenceCatalog {
        self.inner.catalog
    }

    pub fn config(&self) -> &DemandConfig {
        &self.inner.config
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("catalog_entries", &self.inner.catalog.entry_count())
            .field("config", &self.inner.config)
            .finish()
    }
}
