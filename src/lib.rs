//! # shortlink
//!
//! A small URL shortening service built with Axum, persisting every record in
//! a single JSON document.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Records, the collection and the store trait
//! - **Application Layer** ([`application`]) - Shortening and lookup logic
//! - **Infrastructure Layer** ([`infrastructure`]) - JSON file and in-memory stores
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs and middleware
//!
//! ## Endpoints
//!
//! - `POST /shorten` - shorten `{"url": "..."}`
//! - `GET /urls/{id}`, `GET /urls?date=YYYY-MM-DD`, `GET /info/{code}` - lookups
//! - `GET /{code}` - redirect to the original URL
//! - `GET /health` - store health
//!
//! ## Quick Start
//!
//! ```bash
//! export BASE_URL="http://localhost:3000"
//! export DATA_FILE="database.json"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::entities::{Collection, UrlRecord};
    pub use crate::domain::repositories::RecordStore;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::{InMemoryStore, JsonFileStore};
    pub use crate::state::AppState;
}
