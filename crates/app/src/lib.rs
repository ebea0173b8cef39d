//! # daylog-app
//!
//! Application layer: use-case services and the port traits adapters
//! implement.
//!
//! ## Dependency rule
//! Depends only on `daylog-domain`. Adapters depend on this crate for the
//! port traits; this crate must never reference an adapter.

pub mod ports;
pub mod services;
