//! RoomPi Core Library
//!
//! Shared types, the built-in profile table, and configuration for the
//! RoomPi config service. This crate is used by the daemon and holds no
//! HTTP or async code.

pub mod config;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use config::{
    default_config_path, default_conf_path, ConfField, ProfileTable, ServerConfig, StaticConfig,
    CONF_FIELDS, MISSING_FIELD_VALUE,
};
pub use error::*;
pub use types::*;
