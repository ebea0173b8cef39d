//! Storage port — durable persistence for entries.

use std::future::Future;

use daylog_domain::entry::{Entry, NewEntry, SortOrder};
use daylog_domain::error::DaylogError;
use daylog_domain::id::EntryId;
use daylog_domain::time::Timestamp;

/// Repository for persisting and querying [`Entry`] records.
///
/// Entries are immutable once created: there is no update or delete. The
/// repository assigns each entry its identifier and is the sole writer of
/// persistent state.
pub trait EntryRepository {
    /// Persist a draft, assigning it a fresh identifier.
    fn create(&self, entry: NewEntry) -> impl Future<Output = Result<EntryId, DaylogError>> + Send;

    /// Fetch one entry by exact id. A missing entry is `Ok(None)`, never an
    /// error.
    fn get(&self, id: &EntryId) -> impl Future<Output = Result<Option<Entry>, DaylogError>> + Send;

    /// Fetch all entries whose date falls within the inclusive range
    /// `[from, to]`, ordered by date. No matches is `Ok` with an empty vec.
    fn find_between(
        &self,
        from: Timestamp,
        to: Timestamp,
        order: SortOrder,
    ) -> impl Future<Output = Result<Vec<Entry>, DaylogError>> + Send;
}
