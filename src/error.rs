//! Application error type and its HTTP mapping.
//!
//! Every fallible operation in the service and store layers returns
//! [`AppError`]. Handlers return it directly and axum renders it through the
//! [`IntoResponse`] impl below as a JSON body:
//!
//! ```json
//! { "error": { "code": "validation_error", "message": "...", "details": {} } }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed or missing required input.
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// No record (or route) matches the request.
    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// The persistence medium could not be read, parsed or written.
    #[error("{message}")]
    Storage { message: String, details: Value },

    /// Every short-code attempt collided with an existing or reserved code.
    #[error("{message}")]
    CodeGenerationExhausted { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn storage(message: impl Into<String>, details: Value) -> Self {
        Self::Storage {
            message: message.into(),
            details,
        }
    }

    pub fn code_generation_exhausted(message: impl Into<String>, details: Value) -> Self {
        Self::CodeGenerationExhausted {
            message: message.into(),
            details,
        }
    }

    /// Generic 404 used for unmatched routes and malformed path segments.
    pub fn route_not_found() -> Self {
        Self::not_found("Route not found", json!({}))
    }

    /// HTTP status this error is rendered with.
    ///
    /// Storage and code-generation failures are reported as 400 with their
    /// message, matching the contract of the public API.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Storage { .. } | AppError::CodeGenerationExhausted { .. } => {
                StatusCode::BAD_REQUEST
            }
        }
    }

    /// Stable error code string for the response body.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation { .. } => "validation_error",
            AppError::NotFound { .. } => "not_found",
            AppError::Storage { .. } => "storage_error",
            AppError::CodeGenerationExhausted { .. } => "code_generation_exhausted",
        }
    }

    /// Returns true for failures that are not caused by the caller's input.
    pub fn is_unexpected(&self) -> bool {
        matches!(
            self,
            AppError::Storage { .. } | AppError::CodeGenerationExhausted { .. }
        )
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        let (message, details) = match self {
            AppError::Validation { message, details }
            | AppError::NotFound { message, details }
            | AppError::Storage { message, details }
            | AppError::CodeGenerationExhausted { message, details } => {
                (message.clone(), details.clone())
            }
        };

        ErrorInfo {
            code: self.code(),
            message,
            details,
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::storage(
            format!("Storage I/O error: {e}"),
            json!({ "kind": e.kind().to_string() }),
        )
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::storage(
            format!("Storage format error: {e}"),
            json!({ "line": e.line(), "column": e.column() }),
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.is_unexpected() {
            tracing::error!(error = %self, code = self.code(), "Request failed");
        }

        let status = self.status_code();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}
