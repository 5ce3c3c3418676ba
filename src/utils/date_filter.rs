//! Parsing of the `YYYY-MM-DD` creation-date filter.

use chrono::NaiveDate;
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

use crate::error::AppError;

static DATE_SHAPE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap());

/// Validates the shape of a date filter and parses it.
///
/// Only the shape is enforced. A shape-valid string that is not a calendar
/// date (e.g. `2024-02-30`) yields `Ok(None)`: no record can match it.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if `date` is not four digits, dash, two
/// digits, dash, two digits.
pub fn parse_date_filter(date: &str) -> Result<Option<NaiveDate>, AppError> {
    if !DATE_SHAPE_REGEX.is_match(date) {
        return Err(AppError::bad_request(
            "Invalid date format. Use YYYY-MM-DD",
            json!({ "field": "date", "value": date }),
        ));
    }

    Ok(NaiveDate::parse_from_str(date, "%Y-%m-%d").ok())
}
