//! Decoding of HTML form submissions into an entry draft.
//!
//! The fixed fields `date`, `type`, `note` and `value` map onto the draft
//! directly. Every other form key becomes an extra data field: each value
//! is parsed as a JSON literal (`6` → number, `true` → boolean, `[1,2]` →
//! array, …) and falls back to a plain string when it is not valid JSON.
//! Repeated keys are collected into an array.

use std::collections::BTreeMap;

use daylog_domain::entry::{DataMap, NewEntry};
use daylog_domain::error::ValidationError;

/// Build a [`NewEntry`] from decoded urlencoded form fields.
///
/// A missing or empty `date` defaults to now at millisecond precision; a
/// missing or empty `value` defaults to zero.
///
/// # Errors
///
/// Returns [`ValidationError`] when `date` is not RFC 3339 or `value` is
/// not a number.
pub fn entry_from_form(fields: &[(String, String)]) -> Result<NewEntry, ValidationError> {
    let mut builder = NewEntry::builder();
    let mut extra: BTreeMap<&str, Vec<&str>> = BTreeMap::new();

    for (key, value) in fields {
        match key.as_str() {
            "date" => {
                if !value.is_empty() {
                    let date = chrono::DateTime::parse_from_rfc3339(value)
                        .map_err(|_| ValidationError::InvalidTimestamp(value.clone()))?
                        .to_utc();
                    builder = builder.date(date);
                }
            }
            "type" => builder = builder.kind(value.clone()),
            "note" => builder = builder.note(value.clone()),
            "value" => {
                if !value.is_empty() {
                    let parsed: f64 = value.parse().map_err(|_| ValidationError::InvalidNumber {
                        field: "value",
                        value: value.clone(),
                    })?;
                    builder = builder.value(parsed);
                }
            }
            _ => extra.entry(key.as_str()).or_default().push(value.as_str()),
        }
    }

    builder = builder.data(decode_extra_fields(&extra));
    Ok(builder.build())
}

fn decode_extra_fields(extra: &BTreeMap<&str, Vec<&str>>) -> DataMap {
    let mut data = DataMap::new();
    for (key, values) in extra {
        let mut parsed: Vec<serde_json::Value> = values
            .iter()
            .map(|value| {
                serde_json::from_str(value)
                    .unwrap_or_else(|_| serde_json::Value::String((*value).to_owned()))
            })
            .collect();
        let value = if parsed.len() == 1 {
            parsed.remove(0)
        } else {
            serde_json::Value::Array(parsed)
        };
        data.insert((*key).to_owned(), value);
    }
    data
}
