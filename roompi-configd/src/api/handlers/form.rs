//! Edit form rendering and config submission

use crate::api::error::ApiError;
use crate::api::AppState;
use crate::templates::{ConfigForm, SubmitResult};
use axum::{
    extract::{Form, State},
    http::Method,
};
use roompi_core::{config::conf_file, RoomPiError};
use std::collections::HashMap;
use tokio::fs;
use tracing::{debug, info, warn};

/// Render the threshold edit form.
/// GET /
///
/// The profile selector lists the built-in table in display order plus a
/// trailing `Custom...` entry; field values are filled in client-side from
/// the `/load` endpoint.
pub async fn edit_form(State(state): State<AppState>) -> ConfigForm {
    debug!("Request: GET /");

    let names: Vec<String> = state.profiles.names().map(str::to_string).collect();
    ConfigForm::new(names)
}

/// Write submitted form fields to the config file.
/// POST /
///
/// Accepts an arbitrary set of form-encoded key/value pairs. No keys are
/// required and no values are validated; every field of the file layout is
/// written, missing ones as the placeholder literal. The file is fully
/// replaced on each submission.
pub async fn submit_conf(
    State(state): State<AppState>,
    Form(fields): Form<HashMap<String, String>>,
) -> Result<SubmitResult, ApiError> {
    debug!("Request: POST /");
    info!(
        "Submitted fields: {:?}",
        fields.keys().collect::<Vec<&String>>()
    );

    let contents = conf_file::render(&fields);
    fs::write(state.conf_path.as_ref(), contents)
        .await
        .map_err(RoomPiError::Io)?;

    info!("Wrote config file: {}", state.conf_path.display());
    Ok(SubmitResult)
}

/// Fallback for unsupported verbs on the root route.
///
/// Anything but GET/POST on `/` answers with a bare server error.
pub async fn method_not_supported(method: Method) -> ApiError {
    warn!("Unsupported method on /: {}", method);
    ApiError::internal_error(format!("Unsupported method: {}", method))
}
