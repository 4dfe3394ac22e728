//! Error types for the RoomPi config service

use thiserror::Error;

/// Core error type for RoomPi operations
#[derive(Error, Debug)]
pub enum RoomPiError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Profile not found
    #[error("Profile not found: {0}")]
    ProfileNotFound(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for RoomPi operations
pub type Result<T> = std::result::Result<T, RoomPiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: RoomPiError = io_err.into();

        match err {
            RoomPiError::Io(e) => {
                assert_eq!(e.kind(), std::io::ErrorKind::NotFound);
            }
            _ => panic!("Expected Io error"),
        }
    }

    #[test]
    fn test_error_display() {
        let err = RoomPiError::Config("bad bind address".to_string());
        assert_eq!(format!("{}", err), "Configuration error: bad bind address");

        let err = RoomPiError::ProfileNotFound("Biblioteca".to_string());
        assert_eq!(format!("{}", err), "Profile not found: Biblioteca");
    }
}
