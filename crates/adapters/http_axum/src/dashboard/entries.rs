//! Dashboard pages for entries.

use askama::Template;
use axum::extract::{Form, Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use chrono::SecondsFormat;

use daylog_app::ports::EntryRepository;
use daylog_domain::entry::Entry;

use super::DashboardError;
use crate::form::entry_from_form;
use crate::state::AppState;

/// Days of history shown on the landing page.
const LIST_DAYS: i64 = 30;

/// One display-ready row of the entry list.
struct EntryRow {
    id: String,
    date: String,
    kind: String,
    value: f64,
    note: String,
}

impl From<Entry> for EntryRow {
    fn from(entry: Entry) -> Self {
        Self {
            id: entry.id.to_string(),
            date: entry.date.to_rfc3339_opts(SecondsFormat::Secs, true),
            kind: entry.kind,
            value: entry.value,
            note: entry.note,
        }
    }
}

/// Entry list page template.
#[derive(Template)]
#[template(path = "entry_list.html")]
pub struct EntryListTemplate {
    entries: Vec<EntryRow>,
}

impl IntoResponse for EntryListTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// Entry creation form template.
#[derive(Template)]
#[template(path = "entry_form.html")]
pub struct EntryFormTemplate {
    kind: String,
}

impl IntoResponse for EntryFormTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// Entry detail page template.
#[derive(Template)]
#[template(path = "entry_detail.html")]
pub struct EntryDetailTemplate {
    id: String,
    date: String,
    kind: String,
    value: f64,
    note: String,
    data_json: String,
}

impl IntoResponse for EntryDetailTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// Response from the creation form handler (PRG pattern).
pub enum CreateResponse {
    /// Redirect to the detail page of the new entry.
    Redirect(Redirect),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Redirect(redirect) => redirect.into_response(),
        }
    }
}

/// `GET /` — entries of the last 30 days, most recent first.
pub async fn index<R>(
    State(state): State<AppState<R>>,
) -> Result<EntryListTemplate, DashboardError>
where
    R: EntryRepository + Send + Sync + 'static,
{
    let entries = state.entry_service.recent_entries(LIST_DAYS).await?;
    Ok(EntryListTemplate {
        entries: entries.into_iter().map(EntryRow::from).collect(),
    })
}

/// `GET /new` — blank creation form.
pub async fn new_form() -> EntryFormTemplate {
    EntryFormTemplate {
        kind: String::new(),
    }
}

/// `GET /new/{type}` — creation form pre-filled with a category.
pub async fn new_form_typed(Path(kind): Path<String>) -> EntryFormTemplate {
    EntryFormTemplate { kind }
}

/// `POST /new` — create an entry from the submitted form and redirect to
/// its detail page.
pub async fn create<R>(
    State(state): State<AppState<R>>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<CreateResponse, DashboardError>
where
    R: EntryRepository + Send + Sync + 'static,
{
    let draft = entry_from_form(&fields).map_err(daylog_domain::error::DaylogError::from)?;
    let id = state.entry_service.add_entry(draft).await?;
    Ok(CreateResponse::Redirect(Redirect::to(&format!(
        "/entries/{id}"
    ))))
}

/// `GET /entries/{id}` — detail page for one entry.
pub async fn detail<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<EntryDetailTemplate, DashboardError>
where
    R: EntryRepository + Send + Sync + 'static,
{
    let entry = state.entry_service.get_entry(&id.into()).await?;
    let data_json = if entry.data.is_empty() {
        String::new()
    } else {
        serde_json::to_string_pretty(&entry.data).unwrap_or_default()
    };

    Ok(EntryDetailTemplate {
        id: entry.id.to_string(),
        date: entry.date.to_rfc3339_opts(SecondsFormat::Millis, true),
        kind: entry.kind,
        value: entry.value,
        note: entry.note,
        data_json,
    })
}
