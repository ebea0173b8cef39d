//! Application services — one per aggregate.

pub mod entry_service;
