//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use serde_json::json;
use tracing::debug;
use validator::Validate;

use crate::api::dto::lookup::CodePath;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Response
///
/// `302 Found` with `Location` set to the original URL.
///
/// # Errors
///
/// Returns 404 Not Found if `code` is not 6 characters of `[A-Za-z0-9_-]`
/// or no record uses it.
/// Returns 400 Bad Request if the stored URL cannot be sent as a header value.
pub async fn redirect_handler(
    State(state): State<AppState>,
    Path(path): Path<CodePath>,
) -> Result<impl IntoResponse, AppError> {
    path.validate().map_err(|_| AppError::route_not_found())?;

    let record = state
        .link_service
        .get_by_short_code(&path.code)
        .await?
        .ok_or_else(|| AppError::not_found("Code not found", json!({ "code": path.code })))?;

    let location = HeaderValue::from_str(&record.original_url).map_err(|_| {
        AppError::bad_request(
            "Stored URL is not a valid redirect target",
            json!({ "code": record.short_code }),
        )
    })?;

    debug!(code = %record.short_code, "Redirecting");

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]))
}
