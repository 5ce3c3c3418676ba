//! Handler for the link shortening endpoint.

use axum::{Json, body::Bytes, extract::State, http::StatusCode};

use crate::api::dto::shorten::ShortenRequest;
use crate::domain::entities::UrlRecord;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for a long URL, or returns the existing one.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com" }
/// ```
///
/// The body is read as JSON regardless of the `Content-Type` header.
///
/// # Response
///
/// `201 Created`:
///
/// ```json
/// {
///   "id": 1,
///   "originalUrl": "https://example.com",
///   "shortCode": "Xb3_kQ",
///   "shortUrl": "http://localhost:3000/Xb3_kQ",
///   "createdAt": "2024-01-01"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not JSON or `url` is missing,
/// empty or not a string.
pub async fn shorten_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<UrlRecord>), AppError> {
    let url = ShortenRequest::from_body(&body)?.into_url()?;

    let record = state.link_service.shorten(&url).await?;

    Ok((StatusCode::CREATED, Json(record)))
}
