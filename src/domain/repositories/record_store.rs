//! Storage trait for the whole record collection.

use crate::domain::entities::Collection;
use crate::error::AppError;
use async_trait::async_trait;

/// Whole-collection persistence.
///
/// There is no partial-update API: every mutation is "load the collection,
/// modify it in memory, save it back".
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::JsonFileStore`] - JSON document on disk
/// - [`crate::infrastructure::persistence::InMemoryStore`] - process memory
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Returns the full current collection.
    ///
    /// If nothing has been persisted yet, an empty collection is created and
    /// persisted before it is returned.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if the medium cannot be read, parsed or
    /// written.
    async fn load(&self) -> Result<Collection, AppError>;

    /// Overwrites the persisted collection with `collection`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on write failure.
    async fn save(&self, collection: &Collection) -> Result<(), AppError>;
}
