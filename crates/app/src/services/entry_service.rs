//! Entry service — use-cases for recording and reading journal entries.

use chrono::Duration;

use daylog_domain::entry::{Entry, NewEntry, SortOrder};
use daylog_domain::error::{DaylogError, NotFoundError};
use daylog_domain::id::EntryId;
use daylog_domain::time::{Timestamp, now};

use crate::ports::EntryRepository;

/// Application service for creating and querying entries.
pub struct EntryService<R> {
    repo: R,
}

impl<R: EntryRepository> EntryService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Record a new entry and return its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`DaylogError::IdGeneration`] if no identifier could be
    /// minted, or a storage error propagated from the repository.
    pub async fn add_entry(&self, draft: NewEntry) -> Result<EntryId, DaylogError> {
        let id = self.repo.create(draft).await?;
        tracing::debug!(id = %id, "entry created");
        Ok(id)
    }

    /// Look up an entry by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`DaylogError::NotFound`] when no entry with `id` exists, or
    /// a storage error from the repository.
    pub async fn get_entry(&self, id: &EntryId) -> Result<Entry, DaylogError> {
        self.repo.get(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Entry",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List entries within the inclusive date range `[from, to]`.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn entries_between(
        &self,
        from: Timestamp,
        to: Timestamp,
        order: SortOrder,
    ) -> Result<Vec<Entry>, DaylogError> {
        self.repo.find_between(from, to, order).await
    }

    /// List the entries of the last `days` days, most recent first.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn recent_entries(&self, days: i64) -> Result<Vec<Entry>, DaylogError> {
        let to = now();
        let from = to - Duration::days(days);
        self.repo.find_between(from, to, SortOrder::Descending).await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use serde_json::json;

    use daylog_domain::error::{StorageCause, StorageError};

    use super::*;

    /// In-memory repository double; keeps the service tests free of a real
    /// storage engine.
    #[derive(Default)]
    struct InMemoryRepository {
        entries: Mutex<HashMap<EntryId, Entry>>,
        fail_reads: bool,
    }

    impl EntryRepository for InMemoryRepository {
        async fn create(&self, entry: NewEntry) -> Result<EntryId, DaylogError> {
            let id = EntryId::generate()?;
            let entry = entry.into_entry(id.clone());
            self.entries.lock().unwrap().insert(id.clone(), entry);
            Ok(id)
        }

        async fn get(&self, id: &EntryId) -> Result<Option<Entry>, DaylogError> {
            if self.fail_reads {
                let cause: StorageCause = "synthetic failure".into();
                return Err(StorageError::Read(cause).into());
            }
            Ok(self.entries.lock().unwrap().get(id).cloned())
        }

        async fn find_between(
            &self,
            from: Timestamp,
            to: Timestamp,
            order: SortOrder,
        ) -> Result<Vec<Entry>, DaylogError> {
            let mut entries: Vec<Entry> = self
                .entries
                .lock()
                .unwrap()
                .values()
                .filter(|e| e.date >= from && e.date <= to)
                .cloned()
                .collect();
            entries.sort_by_key(|e| e.date);
            if order == SortOrder::Descending {
                entries.reverse();
            }
            Ok(entries)
        }
    }

    #[tokio::test]
    async fn should_return_created_entry_on_get() {
        let service = EntryService::new(InMemoryRepository::default());
        let draft = NewEntry::builder()
            .kind("mood")
            .note("ok")
            .value(0.7)
            .field("sleep_hours", json!(6))
            .build();

        let id = service.add_entry(draft.clone()).await.unwrap();
        let entry = service.get_entry(&id).await.unwrap();

        assert_eq!(entry, draft.into_entry(id));
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_id() {
        let service = EntryService::new(InMemoryRepository::default());
        let err = service
            .get_entry(&EntryId::from("never-issued"))
            .await
            .unwrap_err();
        assert!(matches!(err, DaylogError::NotFound(_)));
    }

    #[tokio::test]
    async fn should_propagate_storage_errors_distinct_from_not_found() {
        let repo = InMemoryRepository {
            fail_reads: true,
            ..InMemoryRepository::default()
        };
        let service = EntryService::new(repo);
        let err = service
            .get_entry(&EntryId::from("whatever"))
            .await
            .unwrap_err();
        assert!(matches!(err, DaylogError::Storage(StorageError::Read(_))));
    }

    #[tokio::test]
    async fn should_list_recent_entries_most_recent_first() {
        let service = EntryService::new(InMemoryRepository::default());
        let reference = now();

        for days_ago in [40, 15, 1] {
            let draft = NewEntry::builder()
                .date(reference - Duration::days(days_ago))
                .kind("mood")
                .value(0.5)
                .build();
            service.add_entry(draft).await.unwrap();
        }

        let recent = service.recent_entries(30).await.unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].date, reference - Duration::days(1));
        assert_eq!(recent[1].date, reference - Duration::days(15));
    }

    #[tokio::test]
    async fn should_return_ascending_as_reverse_of_descending() {
        let service = EntryService::new(InMemoryRepository::default());
        let reference = now();

        for days_ago in [3, 1, 2] {
            let draft = NewEntry::builder()
                .date(reference - Duration::days(days_ago))
                .kind("coffee")
                .value(1.0)
                .build();
            service.add_entry(draft).await.unwrap();
        }

        let from = reference - Duration::days(10);
        let mut desc = service
            .entries_between(from, reference, SortOrder::Descending)
            .await
            .unwrap();
        let asc = service
            .entries_between(from, reference, SortOrder::Ascending)
            .await
            .unwrap();

        desc.reverse();
        assert_eq!(asc, desc);
    }
}
