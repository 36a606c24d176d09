use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Convenient result alias for the aerocharge library.
pub type Result<T> = std::result::Result<T, Error>;

/// Reference table a lookup was performed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CatalogKind {
    AircraftCategory,
    ChargingLevel,
    GrowthScenario,
}

impl CatalogKind {
    /// Human-readable label used in error messages.
    pub fn label(self) -> &'static str {
        match self {
            CatalogKind::AircraftCategory => "aircraft category",
            CatalogKind::ChargingLevel => "charging level",
            CatalogKind::GrowthScenario => "growth scenario",
        }
    }
}

impl std::fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Top-level library error type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Raised when a name is not present in the reference catalog.
    #[error("unknown {kind}: {name}{}", format_suggestions(.suggestions))]
    NotFound {
        kind: CatalogKind,
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when calculation inputs fall outside their valid ranges.
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    /// Raised when reference data fails validation.
    #[error("invalid reference data: {message}")]
    CatalogValidation { message: String },

    /// Raised when two catalog entries share a name (case-insensitive).
    #[error("duplicate {kind} entry: {name}")]
    DuplicateCatalogEntry { kind: CatalogKind, name: String },

    /// Raised when demand model constants are unusable.
    #[error("invalid demand configuration: {message}")]
    InvalidConfig { message: String },
}

impl Error {
    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        Error::InvalidInput {
            message: message.into(),
        }
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
