//! Default path resolution for configuration files
//!
//! Uses XDG Base Directory specification when available, with sensible fallbacks.

use std::path::PathBuf;

/// Returns the default path for the daemon's settings file.
///
/// Uses XDG config directory if available:
/// - Linux/macOS: `~/.config/roompi/configd.toml`
/// - Fallback: `/etc/roompi/configd.toml`
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("/etc"))
        .join("roompi")
        .join("configd.toml")
}

/// Returns the default path for the `roompi.conf` output file.
///
/// Relative to the working directory, where the measurement process
/// historically picks it up.
pub fn default_conf_path() -> PathBuf {
    PathBuf::from("roompi.conf")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_path_is_toml() {
        let path = default_config_path();
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("toml"));
        assert!(path.ends_with("roompi/configd.toml"));
    }

    #[test]
    fn test_default_conf_path_filename() {
        assert_eq!(default_conf_path(), PathBuf::from("roompi.conf"));
    }
}
