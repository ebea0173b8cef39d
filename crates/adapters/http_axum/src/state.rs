//! Shared application state for axum handlers.

use std::sync::Arc;

use daylog_app::ports::EntryRepository;
use daylog_app::services::entry_service::EntryService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch. `Clone` is
/// implemented manually so the repository itself does not need to be
/// `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<R> {
    /// Entry use-case service.
    pub entry_service: Arc<EntryService<R>>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            entry_service: Arc::clone(&self.entry_service),
        }
    }
}

impl<R> AppState<R>
where
    R: EntryRepository + Send + Sync + 'static,
{
    /// Create a new application state from the entry service.
    pub fn new(entry_service: EntryService<R>) -> Self {
        Self {
            entry_service: Arc::new(entry_service),
        }
    }
}
