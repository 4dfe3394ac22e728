//! Profile autofill endpoint

use crate::api::error::ApiError;
use crate::api::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use roompi_core::{Profile, RoomPiError};
use serde::Deserialize;
use tracing::{debug, info};

/// Query parameters for the autofill endpoint
#[derive(Deserialize)]
pub struct LoadQuery {
    /// Profile name to load
    pub profileload: Option<String>,
}

/// Return a named profile's fields as a flat JSON map.
/// GET /load?profileload=Biblioteca
///
/// Timer fields are present only for profiles that define them. An unknown
/// name, and a missing parameter, both answer 404 with the plain-text body
/// `Profile not found`.
pub async fn load_profile(
    State(state): State<AppState>,
    Query(params): Query<LoadQuery>,
) -> Result<Json<Profile>, ApiError> {
    debug!("Request: GET /load");

    let name = params.profileload.unwrap_or_default();
    match state.profiles.get(&name) {
        Some(profile) => {
            info!("Loaded profile '{}'", name);
            Ok(Json(profile.clone()))
        }
        None => Err(RoomPiError::ProfileNotFound(name).into()),
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use roompi_core::{ProfileTable, RoomPiError};

    use crate::api::error::ApiError;

    #[test]
    fn test_missing_parameter_resolves_to_unknown_name() {
        // A missing `profileload` falls back to the empty string, which is
        // never a table key, so the handler takes the not-found path.
        let table = ProfileTable::builtin();
        assert!(table.get("").is_none());
    }

    #[test]
    fn test_not_found_body_is_contractual() {
        let err: ApiError = RoomPiError::ProfileNotFound("Sala 5".to_string()).into();
        assert_eq!(err.status_code, StatusCode::NOT_FOUND);
        assert_eq!(err.message, "Profile not found");
    }
}
