//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use daylog_app::ports::EntryRepository;

use crate::state::AppState;
use crate::{api, dashboard};

/// Build the top-level axum [`Router`].
///
/// Merges the JSON API under `/api` and the HTML pages at `/`. Includes a
/// [`TraceLayer`] that logs each HTTP request/response at the `DEBUG` level
/// using the `tracing` ecosystem.
pub fn build<R>(state: AppState<R>) -> Router
where
    R: EntryRepository + Send + Sync + 'static,
{
    Router::new()
        .merge(dashboard::routes::<R>())
        .nest("/api", api::routes::<R>())
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// `GET /health` — liveness probe.
async fn health() -> &'static str {
    "ok"
}
