//! API module for the RoomPi config daemon
//!
//! Contains the Axum router, shared application state, and error mapping.

pub mod handlers;

use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use roompi_core::ProfileTable;
use std::path::PathBuf;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Built-in profile table, immutable for the process lifetime
    pub profiles: Arc<ProfileTable>,
    /// Destination of the rendered config file
    pub conf_path: Arc<PathBuf>,
}

impl AppState {
    /// Create new application state
    pub fn new(profiles: ProfileTable, conf_path: PathBuf) -> Self {
        Self {
            profiles: Arc::new(profiles),
            conf_path: Arc::new(conf_path),
        }
    }
}

/// Create the main router with all endpoints
pub fn create_router(state: AppState) -> Router {
    info!("Setting up router...");

    let cors = CorsLayer::new()
        .allow_origin("*".parse::<HeaderValue>().unwrap())
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(tower_http::cors::Any);

    let middleware_stack = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(DefaultBodyLimit::max(64 * 1024)); // form posts are tiny

    Router::new()
        // Edit form and submission; other verbs get the generic 500
        .route(
            "/",
            get(handlers::form::edit_form)
                .post(handlers::form::submit_conf)
                .fallback(handlers::form::method_not_supported),
        )
        // Profile autofill endpoint
        .route("/load", get(handlers::profiles::load_profile))
        .layer(middleware_stack)
        .with_state(state)
}

/// Error handling utilities
pub mod error {
    use axum::{
        http::StatusCode,
        response::{IntoResponse, Response},
    };

    use tracing::error;

    /// Custom error type for API responses
    #[derive(Debug)]
    pub struct ApiError {
        pub status_code: StatusCode,
        pub message: String,
    }

    impl ApiError {
        /// Create a new API error
        pub fn new(status_code: StatusCode, message: impl Into<String>) -> Self {
            Self {
                status_code,
                message: message.into(),
            }
        }

        /// Create a not-found error
        pub fn not_found(message: impl Into<String>) -> Self {
            Self::new(StatusCode::NOT_FOUND, message)
        }

        /// Create an internal server error
        pub fn internal_error(message: impl Into<String>) -> Self {
            Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
        }
    }

    impl IntoResponse for ApiError {
        fn into_response(self) -> Response {
            error!("API Error {}: {}", self.status_code, self.message);

            // Plain-text bodies: the /load 404 body is contractual and the
            // autofill script reads responses raw.
            (self.status_code, self.message).into_response()
        }
    }

    /// Convert RoomPiError to ApiError
    impl From<roompi_core::RoomPiError> for ApiError {
        fn from(err: roompi_core::RoomPiError) -> Self {
            match err {
                roompi_core::RoomPiError::ProfileNotFound(_) => {
                    Self::not_found("Profile not found")
                }
                roompi_core::RoomPiError::Io(e) => {
                    Self::internal_error(format!("Failed to write config file: {}", e))
                }
                roompi_core::RoomPiError::Config(msg) => Self::internal_error(msg),
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use roompi_core::RoomPiError;

        #[test]
        fn test_profile_not_found_maps_to_404() {
            let err: ApiError = RoomPiError::ProfileNotFound("Aula 3".to_string()).into();
            assert_eq!(err.status_code, StatusCode::NOT_FOUND);
            assert_eq!(err.message, "Profile not found");
        }

        #[test]
        fn test_io_error_maps_to_500() {
            let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
            let err: ApiError = RoomPiError::Io(io).into();
            assert_eq!(err.status_code, StatusCode::INTERNAL_SERVER_ERROR);
            assert!(err.message.contains("denied"));
        }
    }
}
