//! Helpers shared across layers.
//!
//! - [`code_generator`] - Short code generation and shape checks
//! - [`date_filter`] - `YYYY-MM-DD` filter parsing

pub mod code_generator;
pub mod date_filter;
