//! API route configuration.

use crate::api::handlers::{
    get_by_date_handler, get_by_id_handler, info_handler, shorten_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// JSON API routes.
///
/// # Endpoints
///
/// - `POST /shorten`              - Create (or fetch) the short link for a URL
/// - `GET  /urls/{id}`            - Record by numeric id
/// - `GET  /urls?date=YYYY-MM-DD` - Records created on a given day
/// - `GET  /info/{code}`          - Record by short code
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/urls", get(get_by_date_handler))
        .route("/urls/{id}", get(get_by_id_handler))
        .route("/info/{code}", get(info_handler))
}
