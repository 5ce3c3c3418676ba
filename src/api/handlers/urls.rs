//! Handlers for record lookups by id and by creation date.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::lookup::{DateQuery, IdPath};
use crate::domain::entities::UrlRecord;
use crate::error::AppError;
use crate::state::AppState;

/// Returns one record by its numeric id.
///
/// # Endpoint
///
/// `GET /urls/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if `id` is not all digits (route mismatch) or no
/// record has this id.
pub async fn get_by_id_handler(
    State(state): State<AppState>,
    Path(path): Path<IdPath>,
) -> Result<Json<UrlRecord>, AppError> {
    path.validate().map_err(|_| AppError::route_not_found())?;

    // Digit strings too large for u64 cannot name an existing record.
    let record = match path.id.parse::<u64>() {
        Ok(id) => state.link_service.get_by_id(id).await?,
        Err(_) => None,
    };

    record
        .map(Json)
        .ok_or_else(|| AppError::not_found("URL not found", json!({ "id": path.id })))
}

/// Lists records created on a given day.
///
/// # Endpoint
///
/// `GET /urls?date=YYYY-MM-DD`
///
/// # Response
///
/// `200 OK` with a JSON array in creation order, possibly empty.
///
/// # Errors
///
/// Returns 400 Bad Request if `date` is not shaped `YYYY-MM-DD`.
/// Returns 404 Not Found if `date` is absent or empty.
pub async fn get_by_date_handler(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> Result<Json<Vec<UrlRecord>>, AppError> {
    let date = match query.date {
        Some(date) if !date.is_empty() => date,
        _ => return Err(AppError::route_not_found()),
    };

    let records = state.link_service.get_by_date(&date).await?;

    Ok(Json(records))
}
