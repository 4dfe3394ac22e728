//! HTTP request handlers for the RoomPi config daemon.
//!
//! # Handler Modules
//!
//! - [`form`] - edit form rendering, config submission, verb fallback
//! - [`profiles`] - profile autofill endpoint
//!
//! All handlers accept `State<AppState>` for the shared profile table and
//! output path, and log each request with the `tracing` crate. Failures map
//! through [`crate::api::error::ApiError`] to plain-text responses.

pub mod form;
pub mod profiles;
