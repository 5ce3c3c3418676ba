//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod fallback;
pub mod health;
pub mod info;
pub mod redirect;
pub mod shorten;
pub mod urls;

pub use fallback::not_found_handler;
pub use health::health_handler;
pub use info::info_handler;
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
pub use urls::{get_by_date_handler, get_by_id_handler};
