//! Data Transfer Objects for API requests and responses.
//!
//! Records themselves are serialized straight from
//! [`crate::domain::entities::UrlRecord`].

pub mod health;
pub mod lookup;
pub mod shorten;
