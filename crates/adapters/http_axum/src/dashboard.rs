//! Server-side rendered HTML pages (no JavaScript).
//!
//! Interactive controls are plain `<form>` elements that POST back and
//! redirect (PRG pattern).

pub mod entries;

use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;

use daylog_app::ports::EntryRepository;
use daylog_domain::error::DaylogError;

use crate::state::AppState;

/// Maps [`DaylogError`] to a plain-text HTTP response for HTML pages.
pub struct DashboardError(DaylogError);

impl From<DaylogError> for DashboardError {
    fn from(err: DaylogError) -> Self {
        Self(err)
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            DaylogError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            DaylogError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            DaylogError::IdGeneration(_) | DaylogError::Storage(_) => {
                tracing::error!(error = %self.0, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, message).into_response()
    }
}

/// Build the dashboard sub-router for SSR HTML pages.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: EntryRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(entries::index::<R>))
        .route("/new", get(entries::new_form).post(entries::create::<R>))
        .route("/new/{type}", get(entries::new_form_typed))
        .route("/entries/{id}", get(entries::detail::<R>))
}
