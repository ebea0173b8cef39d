//! # daylog-domain
//!
//! Pure domain model for the daylog journaling system.
//!
//! ## Responsibilities
//! - Foundational types: the [`entry::Entry`] record, opaque identifiers,
//!   error conventions, timestamps
//! - Define the error taxonomy shared by all layers
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod entry;
pub mod error;
pub mod id;
pub mod time;
