//! Application layer services implementing business logic.
//!
//! Services consume the storage trait from [`crate::domain::repositories`]
//! and provide a clean API for HTTP handlers and the admin CLI.
//!
//! - [`services::link_service::LinkService`] - Short link creation and retrieval

pub mod services;
