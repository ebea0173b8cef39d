//! JSON REST handlers for entries.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::Duration;
use serde::{Deserialize, Serialize};

use daylog_app::ports::EntryRepository;
use daylog_domain::entry::{Entry, NewEntry, SortOrder};
use daylog_domain::error::{DaylogError, ValidationError};
use daylog_domain::id::EntryId;
use daylog_domain::time::{Timestamp, now};

use crate::error::ApiError;
use crate::state::AppState;

/// Default time range for the list endpoint: the last 30 days.
const DEFAULT_DAYS: i64 = 30;

/// Query parameters for the list endpoint.
#[derive(Deserialize)]
pub struct ListQuery {
    /// Start of the range (RFC 3339). Defaults to 30 days ago.
    pub from: Option<String>,
    /// End of the range (RFC 3339). Defaults to now.
    pub to: Option<String>,
    /// `asc` or `desc`. Defaults to `desc` (most recent first).
    #[serde(default)]
    pub order: SortOrder,
}

/// Response body for a successful create.
#[derive(Serialize)]
pub struct CreatedBody {
    pub id: EntryId,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Entry>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Entry>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<CreatedBody>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Parse an optional RFC 3339 timestamp, rejecting malformed input before
/// it reaches the repository.
fn parse_timestamp(value: &str) -> Result<Timestamp, ApiError> {
    chrono::DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.to_utc())
        .map_err(|_| {
            ApiError::from(DaylogError::from(ValidationError::InvalidTimestamp(
                value.to_owned(),
            )))
        })
}

/// `GET /api/entries?from=&to=&order=`
pub async fn list<R>(
    State(state): State<AppState<R>>,
    Query(params): Query<ListQuery>,
) -> Result<ListResponse, ApiError>
where
    R: EntryRepository + Send + Sync + 'static,
{
    let current = now();
    let from = params
        .from
        .as_deref()
        .map(parse_timestamp)
        .transpose()?
        .unwrap_or_else(|| current - Duration::days(DEFAULT_DAYS));
    let to = params
        .to
        .as_deref()
        .map(parse_timestamp)
        .transpose()?
        .unwrap_or(current);

    let entries = state
        .entry_service
        .entries_between(from, to, params.order)
        .await?;
    Ok(ListResponse::Ok(Json(entries)))
}

/// `GET /api/entries/{id}`
pub async fn get<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    R: EntryRepository + Send + Sync + 'static,
{
    let entry = state.entry_service.get_entry(&EntryId::from(id)).await?;
    Ok(GetResponse::Ok(Json(entry)))
}

/// `POST /api/entries`
pub async fn create<R>(
    State(state): State<AppState<R>>,
    Json(draft): Json<NewEntry>,
) -> Result<CreateResponse, ApiError>
where
    R: EntryRepository + Send + Sync + 'static,
{
    let id = state.entry_service.add_entry(draft).await?;
    Ok(CreateResponse::Created(Json(CreatedBody { id })))
}
