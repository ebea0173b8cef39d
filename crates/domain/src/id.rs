//! Opaque entry identifiers backed by secure random bytes.

use std::fmt;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE;
use rand::RngCore as _;
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};

use crate::error::IdGenerationError;

/// Number of random bytes drawn for a fresh identifier.
const ID_BYTES: usize = 12;

/// Unique identifier for an [`Entry`](crate::entry::Entry).
///
/// Generated from 12 bytes of OS randomness, encoded with the URL-safe
/// base64 alphabet. Opaque once issued: any non-empty string parses back
/// into an id, and lookups with an unknown id simply find nothing.
///
/// Collisions are not checked against existing entries; at 96 bits of
/// randomness the probability is treated as negligible.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    /// Generate a fresh random identifier.
    ///
    /// # Errors
    ///
    /// Returns [`IdGenerationError`] if the OS random source fails.
    pub fn generate() -> Result<Self, IdGenerationError> {
        let mut buf = [0u8; ID_BYTES];
        OsRng.try_fill_bytes(&mut buf)?;
        Ok(Self(URL_SAFE.encode(buf)))
    }

    /// Wrap an existing identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// View the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for EntryId {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

impl From<&str> for EntryId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn should_generate_non_empty_id() {
        let id = EntryId::generate().unwrap();
        assert!(!id.as_str().is_empty());
    }

    #[test]
    fn should_use_only_url_safe_base64_characters() {
        for _ in 0..100 {
            let id = EntryId::generate().unwrap();
            assert!(
                id.as_str()
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '=')),
                "unexpected character in {:?}",
                id.as_str()
            );
        }
    }

    #[test]
    fn should_generate_pairwise_distinct_ids() {
        let mut seen = HashSet::new();
        for _ in 0..10_000 {
            let id = EntryId::generate().unwrap();
            assert!(seen.insert(id.clone()), "duplicate id {id}");
        }
    }

    #[test]
    fn should_wrap_existing_identifier_strings() {
        assert_eq!(EntryId::new("a1b2").as_str(), "a1b2");
        assert_eq!(EntryId::from("a1b2"), EntryId::new("a1b2"));
        assert_eq!(EntryId::from(String::from("a1b2")), EntryId::new("a1b2"));
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let id = EntryId::generate().unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{id}\""));
        let parsed: EntryId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }
}
