//! DTOs for the link shortening endpoint.

use serde::Deserialize;
use serde_json::{Value, json};

use crate::error::AppError;

/// Body of `POST /shorten`.
///
/// `url` is kept as a raw JSON value so that missing, `null` and non-string
/// inputs can all be reported as the same validation error.
#[derive(Debug, Default, Deserialize)]
pub struct ShortenRequest {
    #[serde(default)]
    pub url: Option<Value>,
}

impl ShortenRequest {
    /// Parses a request body. An empty body is treated as `{}`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the body is not a JSON object.
    pub fn from_body(body: &[u8]) -> Result<Self, AppError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        serde_json::from_slice(body).map_err(|e| {
            AppError::bad_request("Invalid JSON body", json!({ "reason": e.to_string() }))
        })
    }

    /// Extracts the URL to shorten.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `url` is missing, `null`, not a
    /// string, or empty.
    pub fn into_url(self) -> Result<String, AppError> {
        match self.url {
            Some(Value::String(url)) if !url.is_empty() => Ok(url),
            Some(Value::String(_)) | Some(Value::Null) | None => Err(AppError::bad_request(
                "Field \"url\" is required",
                json!({ "field": "url" }),
            )),
            Some(other) => Err(AppError::bad_request(
                "Field \"url\" must be a string",
                json!({ "field": "url", "type": json_type_name(&other) }),
            )),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
