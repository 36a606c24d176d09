//! Response wrapper for successful HTTP responses.

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Successful response body: the payload's fields plus `content_type`,
/// mirroring the shape of [`crate::ProblemDetails`].
///
/// ```
/// use aerocharge_service_shared::ServiceResponse;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Totals {
///     annual_energy_mwh: f64,
/// }
///
/// let body = serde_json::to_value(ServiceResponse::new(Totals { annual_energy_mwh: 59.68 })).unwrap();
/// assert_eq!(body["annual_energy_mwh"], 59.68);
/// assert_eq!(body["content_type"], "application/json");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceResponse<T> {
    #[serde(flatten)]
    pub data: T,

    pub content_type: String,
}

impl<T> ServiceResponse<T> {
    /// Wrap `data` with the `application/json` content type.
    pub fn new(data: T) -> Self {
        Self {
            data,
            content_type: "application/json".to_string(),
        }
    }
}

impl<T> From<T> for ServiceResponse<T> {
    fn from(data: T) -> Self {
        Self::new(data)
    }
}

impl<T: Serialize> IntoResponse for ServiceResponse<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
