//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use daylog_domain::error::DaylogError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`DaylogError`] to an HTTP response with appropriate status code.
pub struct ApiError(DaylogError);

impl From<DaylogError> for ApiError {
    fn from(err: DaylogError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            DaylogError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            DaylogError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            DaylogError::IdGeneration(err) => {
                tracing::error!(error = %err, "identifier generation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            DaylogError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
