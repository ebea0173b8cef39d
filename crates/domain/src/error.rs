//! Common error types used across the workspace.
//!
//! Each layer produces typed errors and converts into [`DaylogError`] via
//! `#[from]`. Adapters box their backend-specific causes into
//! [`StorageError`] so this crate never references IO crates.

/// Boxed cause for storage failures; keeps sqlx and friends out of the domain.
pub type StorageCause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error for all daylog operations.
#[derive(Debug, thiserror::Error)]
pub enum DaylogError {
    /// Malformed user input, rejected before it reaches storage.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A requested entry does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The secure random source failed while minting an identifier.
    #[error("identifier generation failed")]
    IdGeneration(#[from] IdGenerationError),

    /// The storage layer failed.
    #[error("storage error")]
    Storage(#[from] StorageError),
}

/// Failures originating in the persistence layer.
///
/// "Not found" is deliberately absent: repositories report a missing row as
/// `Ok(None)`, never as an error.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Applying the schema definition failed. Fatal at startup.
    #[error("could not initialize storage schema")]
    SchemaInit(#[source] StorageCause),

    /// A row could not be written.
    #[error("could not store entry")]
    Write(#[source] StorageCause),

    /// A query could not be executed or fully consumed.
    #[error("could not read from storage")]
    Read(#[source] StorageCause),

    /// The stored data payload of a row is not valid JSON.
    ///
    /// Distinct from [`StorageError::Read`]: this is an integrity problem,
    /// not a transient IO failure.
    #[error("stored data for entry {id:?} is not valid JSON")]
    Corruption {
        id: String,
        #[source]
        source: serde_json::Error,
    },
}

/// The OS random source failed while drawing identifier bytes.
#[derive(Debug, thiserror::Error)]
#[error("could not draw random bytes for identifier")]
pub struct IdGenerationError(#[from] rand::Error);

/// A lookup for a specific record came back empty.
#[derive(Debug, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

/// Malformed user-supplied input.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// A date string is not RFC 3339.
    #[error("{0:?} is not a valid RFC 3339 timestamp")]
    InvalidTimestamp(String),

    /// A numeric field did not parse.
    #[error("{value:?} of field {field:?} is not a number")]
    InvalidNumber { field: &'static str, value: String },
}
