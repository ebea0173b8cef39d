//! The journal entry record and its creation draft.

use serde::{Deserialize, Serialize};

use crate::id::EntryId;
use crate::time::{Timestamp, now_millis};

/// Open-ended extra attributes attached to an entry.
///
/// Schemaless by design: values may be strings, numbers, booleans, nulls,
/// arrays, or nested objects. An empty map and an absent map are the same
/// thing and both serialize to nothing.
pub type DataMap = serde_json::Map<String, serde_json::Value>;

/// One logged record: a timestamped measurement with free-form metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Opaque identifier, assigned by the repository at creation time.
    pub id: EntryId,
    /// When the entry happened, UTC, millisecond precision.
    pub date: Timestamp,
    /// Short free-text category label ("mood", "coffee", "expense", …).
    /// Not validated: any string is accepted, including the empty one.
    #[serde(rename = "type")]
    pub kind: String,
    /// Optional free-text annotation.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub note: String,
    /// Single numeric measurement; interpretation is up to the consumer.
    pub value: f64,
    /// User-defined extra attributes not covered by the fixed fields.
    #[serde(default, skip_serializing_if = "DataMap::is_empty")]
    pub data: DataMap,
}

/// An [`Entry`] before the repository has assigned it an identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEntry {
    /// Defaults to "now" at millisecond precision when the caller omits it.
    #[serde(default = "now_millis")]
    pub date: Timestamp,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub note: String,
    #[serde(default)]
    pub value: f64,
    #[serde(default, skip_serializing_if = "DataMap::is_empty")]
    pub data: DataMap,
}

impl NewEntry {
    /// Create a builder for constructing a [`NewEntry`].
    #[must_use]
    pub fn builder() -> NewEntryBuilder {
        NewEntryBuilder::default()
    }

    /// Attach the repository-assigned identifier, producing a full [`Entry`].
    #[must_use]
    pub fn into_entry(self, id: EntryId) -> Entry {
        Entry {
            id,
            date: self.date,
            kind: self.kind,
            note: self.note,
            value: self.value,
            data: self.data,
        }
    }
}

/// Step-by-step builder for [`NewEntry`].
#[derive(Debug, Default)]
pub struct NewEntryBuilder {
    date: Option<Timestamp>,
    kind: String,
    note: String,
    value: f64,
    data: DataMap,
}

impl NewEntryBuilder {
    #[must_use]
    pub fn date(mut self, date: Timestamp) -> Self {
        self.date = Some(date);
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    #[must_use]
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    #[must_use]
    pub fn value(mut self, value: f64) -> Self {
        self.value = value;
        self
    }

    /// Add a single extra data field.
    #[must_use]
    pub fn field(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.data.insert(key.into(), value);
        self
    }

    /// Replace the whole extra data map.
    #[must_use]
    pub fn data(mut self, data: DataMap) -> Self {
        self.data = data;
        self
    }

    /// Finish the draft. A missing date defaults to now at millisecond
    /// precision.
    #[must_use]
    pub fn build(self) -> NewEntry {
        NewEntry {
            date: self.date.unwrap_or_else(now_millis),
            kind: self.kind,
            note: self.note,
            value: self.value,
            data: self.data,
        }
    }
}

/// Ordering applied to the `date` column of a range query.
///
/// No secondary sort key exists: entries sharing a timestamp come back in
/// an implementation-defined relative order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    /// Oldest first.
    #[serde(rename = "asc")]
    Ascending,
    /// Most recent first.
    #[default]
    #[serde(rename = "desc")]
    Descending,
}
