//! # daylog-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the [`EntryRepository`](daylog_app::ports::EntryRepository)
//!   port defined in `daylog-app`
//! - Manage the `SQLite` connection pool lifecycle
//! - Apply the schema definition file at startup (idempotently)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `daylog-app` (for the port trait) and `daylog-domain` (for
//! domain types). The `app` and `domain` crates must never reference this
//! adapter.

pub mod entry_repo;
pub mod pool;

pub use entry_repo::SqliteEntryRepository;
pub use pool::{Config, Database};
