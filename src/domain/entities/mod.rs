//! Core domain entities.
//!
//! - [`UrlRecord`] - A shortened URL mapping
//! - [`Collection`] - The ordered set of records, the unit of persistence

pub mod url_record;

pub use url_record::{Collection, UrlRecord};
