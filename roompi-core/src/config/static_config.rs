//! Static configuration loaded once at startup
//!
//! This configuration is read-only after the daemon starts.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::paths::default_conf_path;

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    pub bind: String,
    /// Server port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0".to_string(),
            port: 8082,
        }
    }
}

/// Static configuration for the RoomPi config daemon.
///
/// Loaded once at startup and immutable during runtime.
/// Located at `~/.config/roompi/configd.toml` by default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaticConfig {
    /// Server configuration (bind address, port)
    pub server: ServerConfig,

    /// Path the rendered `roompi.conf` is written to on each submission.
    ///
    /// Defaults to `roompi.conf` in the working directory.
    #[serde(default = "default_conf_path")]
    pub conf_path: PathBuf,
}

impl Default for StaticConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            conf_path: default_conf_path(),
        }
    }
}

impl StaticConfig {
    /// Parse StaticConfig from TOML string.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize StaticConfig to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_static_config() {
        let config = StaticConfig::default();
        assert_eq!(config.server.bind, "0.0.0.0");
        assert_eq!(config.server.port, 8082);
        assert_eq!(config.conf_path, PathBuf::from("roompi.conf"));
    }

    #[test]
    fn test_static_config_serialization() {
        let config = StaticConfig::default();
        let toml_str = config.to_toml().unwrap();

        assert!(toml_str.contains("[server]"));
        assert!(toml_str.contains("conf_path"));
    }

    #[test]
    fn test_static_config_deserialization() {
        let toml_str = r#"
            conf_path = "/home/pi/roompi.conf"

            [server]
            bind = "127.0.0.1"
            port = 9000
        "#;

        let config = StaticConfig::from_toml(toml_str).unwrap();
        assert_eq!(config.server.bind, "127.0.0.1");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.conf_path, PathBuf::from("/home/pi/roompi.conf"));
    }

    #[test]
    fn test_conf_path_defaults_when_missing() {
        let toml_str = r#"
            [server]
            bind = "0.0.0.0"
            port = 8082
        "#;

        let config = StaticConfig::from_toml(toml_str).unwrap();
        assert_eq!(config.conf_path, PathBuf::from("roompi.conf"));
    }
}
