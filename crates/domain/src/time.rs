//! Time and timestamp helpers.

use chrono::{DateTime, Utc};

/// UTC timestamp attached to every entry.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Return the current UTC time truncated to millisecond precision.
///
/// Storage keeps dates at millisecond granularity, so defaulted dates are
/// truncated up front to round-trip exactly.
#[must_use]
pub fn now_millis() -> Timestamp {
    truncate_millis(Utc::now())
}

/// Truncate a timestamp to millisecond precision.
#[must_use]
pub fn truncate_millis(ts: Timestamp) -> Timestamp {
    DateTime::from_timestamp_millis(ts.timestamp_millis()).unwrap_or(ts)
}
