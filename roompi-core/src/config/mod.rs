//! Configuration types for the RoomPi config service
//!
//! Configuration is split into:
//! - [`ProfileTable`] - built-in threshold profiles, immutable after startup
//! - [`conf_file`] - rendering of the flat `roompi.conf` output file
//! - [`StaticConfig`] - daemon settings (bind address, output path), loaded
//!   once at startup

pub mod conf_file;
mod paths;
mod profiles;
mod static_config;

pub use conf_file::{render, ConfField, CONF_FIELDS, MISSING_FIELD_VALUE};
pub use paths::{default_conf_path, default_config_path};
pub use profiles::ProfileTable;
pub use static_config::{ServerConfig, StaticConfig};
