//! Record store implementations.
//!
//! - [`JsonFileStore`] - Whole-collection JSON document on disk
//! - [`InMemoryStore`] - Process-local store for tests and dry runs

pub mod in_memory_store;
pub mod json_file_store;

pub use in_memory_store::InMemoryStore;
pub use json_file_store::JsonFileStore;
