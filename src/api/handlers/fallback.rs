//! Handler for requests no route matches.

use crate::error::AppError;

/// Generic 404 for unknown paths and unsupported methods on known paths.
pub async fn not_found_handler() -> AppError {
    AppError::route_not_found()
}
