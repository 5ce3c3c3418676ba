//! Handler for short code metadata lookups.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::lookup::CodePath;
use crate::domain::entities::UrlRecord;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the record behind a short code without redirecting.
///
/// # Endpoint
///
/// `GET /info/{code}`
///
/// # Errors
///
/// Returns 404 Not Found if `code` is not 6 characters of `[A-Za-z0-9_-]`
/// or no record uses it.
pub async fn info_handler(
    State(state): State<AppState>,
    Path(path): Path<CodePath>,
) -> Result<Json<UrlRecord>, AppError> {
    path.validate().map_err(|_| AppError::route_not_found())?;

    state
        .link_service
        .get_by_short_code(&path.code)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found("Code not found", json!({ "code": path.code })))
}
