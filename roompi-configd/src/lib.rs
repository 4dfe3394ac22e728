//! RoomPi Config Daemon Library
//!
//! HTTP front-end for editing sensor threshold profiles and writing the
//! `roompi.conf` file consumed by the measurement process. The router and
//! application state are public so integration tests can drive the service
//! in-process.

/// REST/HTML API: router, application state, handlers.
pub mod api;

/// Askama templates for the edit form and confirmation page.
pub mod templates;
