//! `SQLite` implementation of [`EntryRepository`].

use chrono::SecondsFormat;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row as _, SqlitePool};

use daylog_app::ports::EntryRepository;
use daylog_domain::entry::{DataMap, Entry, NewEntry, SortOrder};
use daylog_domain::error::{DaylogError, StorageError};
use daylog_domain::id::EntryId;
use daylog_domain::time::Timestamp;

const INSERT: &str = r"
    INSERT INTO entries (id, date, type, note, value, data)
    VALUES (?, ?, ?, ?, ?, ?)
";

const SELECT_BY_ID: &str = r"
    SELECT id, date, type, note, value, data FROM entries WHERE id = ?
";

const SELECT_BETWEEN_ASC: &str = r"
    SELECT id, date, type, note, value, data FROM entries
    WHERE date >= ? AND date <= ?
    ORDER BY date ASC
";

const SELECT_BETWEEN_DESC: &str = r"
    SELECT id, date, type, note, value, data FROM entries
    WHERE date >= ? AND date <= ?
    ORDER BY date DESC
";

/// `SQLite`-backed entry repository.
///
/// The sole writer of the `entries` table. Each operation is a single
/// statement; concurrent calls rely on `SQLite`'s own locking, no
/// additional transactions are opened.
pub struct SqliteEntryRepository {
    pool: SqlitePool,
}

impl SqliteEntryRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// Dates are stored as fixed-width RFC 3339 strings with millisecond
/// precision and a `Z` suffix, so lexicographic comparison in SQL matches
/// chronological order.
fn format_date(date: Timestamp) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn read_err(err: sqlx::Error) -> StorageError {
    StorageError::Read(Box::new(err))
}

fn write_err(err: sqlx::Error) -> StorageError {
    StorageError::Write(Box::new(err))
}

/// Decode the serialized data column.
///
/// SQL `NULL`, the empty string and the literal `null` (written by earlier
/// iterations of the format) all mean "no extra data". Anything else must
/// parse as a JSON object, otherwise the stored payload is corrupt.
fn decode_data(id: &str, raw: Option<String>) -> Result<DataMap, StorageError> {
    match raw {
        None => Ok(DataMap::new()),
        Some(text) if text.trim().is_empty() || text == "null" => Ok(DataMap::new()),
        Some(text) => {
            serde_json::from_str(&text).map_err(|source| StorageError::Corruption {
                id: id.to_owned(),
                source,
            })
        }
    }
}

fn decode_row(row: &SqliteRow) -> Result<Entry, StorageError> {
    let id: String = row.try_get("id").map_err(read_err)?;
    let date_text: String = row.try_get("date").map_err(read_err)?;
    let kind: String = row.try_get("type").map_err(read_err)?;
    let note: String = row.try_get("note").map_err(read_err)?;
    let value: f64 = row.try_get("value").map_err(read_err)?;
    let raw_data: Option<String> = row.try_get("data").map_err(read_err)?;

    let date = chrono::DateTime::parse_from_rfc3339(&date_text)
        .map_err(|err| StorageError::Read(Box::new(err)))?
        .to_utc();
    let data = decode_data(&id, raw_data)?;

    Ok(Entry {
        id: EntryId::from(id),
        date,
        kind,
        note,
        value,
        data,
    })
}

impl EntryRepository for SqliteEntryRepository {
    async fn create(&self, entry: NewEntry) -> Result<EntryId, DaylogError> {
        let id = EntryId::generate()?;

        let data_json = if entry.data.is_empty() {
            None
        } else {
            Some(serde_json::to_string(&entry.data).map_err(|err| {
                StorageError::Write(Box::new(err))
            })?)
        };

        sqlx::query(INSERT)
            .bind(id.as_str())
            .bind(format_date(entry.date))
            .bind(&entry.kind)
            .bind(&entry.note)
            .bind(entry.value)
            .bind(data_json)
            .execute(&self.pool)
            .await
            .map_err(write_err)?;

        Ok(id)
    }

    async fn get(&self, id: &EntryId) -> Result<Option<Entry>, DaylogError> {
        let row = sqlx::query(SELECT_BY_ID)
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(read_err)?;

        match row {
            None => Ok(None),
            Some(row) => Ok(Some(decode_row(&row)?)),
        }
    }

    async fn find_between(
        &self,
        from: Timestamp,
        to: Timestamp,
        order: SortOrder,
    ) -> Result<Vec<Entry>, DaylogError> {
        let query = match order {
            SortOrder::Ascending => SELECT_BETWEEN_ASC,
            SortOrder::Descending => SELECT_BETWEEN_DESC,
        };

        let rows = sqlx::query(query)
            .bind(format_date(from))
            .bind(format_date(to))
            .fetch_all(&self.pool)
            .await
            .map_err(read_err)?;

        // Fail fast on a corrupt row: a partial result set would be
        // misleading for a range query.
        let entries = rows
            .iter()
            .map(decode_row)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(entries)
    }
}
