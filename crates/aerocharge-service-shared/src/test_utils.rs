//! Fixtures for handler tests.

use std::sync::atomic::{AtomicU64, Ordering};

use aerocharge_lib::DemandConfig;

use crate::request::EstimateRequest;
use crate::state::AppState;

/// Names from the built-in reference catalog.
pub mod fixture_names {
    pub const GENERAL_AVIATION: &str = "General Aviation";
    pub const AIR_TAXI: &str = "Air Taxi";
    pub const EVTOL: &str = "eVTOL";

    pub const LEVEL_2: &str = "Level 2";
    pub const DCFC: &str = "Level 3+ (DCFC)";

    pub const MEDIUM: &str = "Medium";
    pub const HIGH: &str = "High";
}

/// State over the built-in catalog with the default demand configuration.
pub fn test_state() -> AppState {
    AppState::new(DemandConfig::default())
        .unwrap_or_else(|e| panic!("default demand configuration rejected: {e}"))
}

/// Request selecting the three names explicitly and leaving numbers at their defaults.
pub fn estimate_request(category: &str, charging_level: &str, scenario: &str) -> EstimateRequest {
    EstimateRequest {
        category: Some(category.to_string()),
        charging_level: Some(charging_level.to_string()),
        scenario: Some(scenario.to_string()),
        ..EstimateRequest::default()
    }
}

/// Unique request id for assertions on `instance`.
pub fn test_request_id() -> String {
    static NEXT: AtomicU64 = AtomicU64::new(1);
    format!("test-{}", NEXT.fetch_add(1, Ordering::Relaxed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Validate;

    #[test]
    fn fixture_names_resolve() {
        let catalog = test_state().catalog();
        assert!(catalog.aircraft(fixture_names::EVTOL).is_ok());
        assert!(catalog.charging_level(fixture_names::LEVEL_2).is_ok());
        assert!(catalog.scenario(fixture_names::HIGH).is_ok());
    }

    #[test]
    fn request_builder_is_valid() {
        let request = estimate_request(
            fixture_names::AIR_TAXI,
            fixture_names::DCFC,
            fixture_names::MEDIUM,
        );
        assert!(request.validate(&test_request_id()).is_ok());
    }

    #[test]
    fn request_ids_are_unique() {
        assert_ne!(test_request_id(), test_request_id());
    }
}
