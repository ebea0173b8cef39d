//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside
//! world. They live here so the use-case layer and the adapter layer can
//! both depend on them without a circular dependency.

pub mod storage;

pub use storage::EntryRepository;
