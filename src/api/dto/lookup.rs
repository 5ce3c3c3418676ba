//! Path and query parameters for the lookup endpoints.
//!
//! A parameter of the wrong shape means the route itself does not match, so
//! handlers turn validation failures into the generic route-not-found error.

use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;
use validator::Validate;

/// Compiled regex for short code path segments.
static SHORT_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{6}$").unwrap());

/// Compiled regex for numeric id path segments.
static ID_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+$").unwrap());

/// `{code}` path segment of `/info/{code}` and `/{code}`.
#[derive(Debug, Deserialize, Validate)]
pub struct CodePath {
    #[validate(regex(path = *SHORT_CODE_REGEX))]
    pub code: String,
}

/// `{id}` path segment of `/urls/{id}`.
#[derive(Debug, Deserialize, Validate)]
pub struct IdPath {
    #[validate(regex(path = *ID_REGEX))]
    pub id: String,
}

/// Query string of `GET /urls`.
#[derive(Debug, Deserialize)]
pub struct DateQuery {
    pub date: Option<String>,
}
