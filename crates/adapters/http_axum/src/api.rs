//! JSON REST API.

pub mod entries;

use axum::Router;
use axum::routing::get;

use daylog_app::ports::EntryRepository;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: EntryRepository + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/entries",
            get(entries::list::<R>).post(entries::create::<R>),
        )
        .route("/entries/{id}", get(entries::get::<R>))
}
