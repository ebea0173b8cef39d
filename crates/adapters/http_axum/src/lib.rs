//! # daylog-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a JSON API under `/api/entries` for programmatic access
//! - Serve server-side-rendered HTML pages that work with zero JavaScript:
//!   entry list, creation form (PRG pattern), entry detail
//! - Decode user input (JSON bodies, HTML forms) into domain drafts and
//!   reject malformed input before it reaches the repository
//! - Map application results and errors into HTTP responses
//!
//! ## Dependency rule
//! Depends on `daylog-app` (for the port trait and service) and
//! `daylog-domain` (for the types used in request/response mapping). Never
//! leaks axum types into the domain.

pub mod api;
pub mod dashboard;
pub mod error;
pub mod form;
pub mod router;
pub mod state;
