//! In-memory implementation of the record store.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::{Collection, UrlRecord};
use crate::domain::repositories::RecordStore;
use crate::error::AppError;

/// Keeps the collection in process memory. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    collection: RwLock<Collection>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `records`, kept in the given order.
    pub fn with_records(records: Vec<UrlRecord>) -> Self {
        Self {
            collection: RwLock::new(Collection { urls: records }),
        }
    }
}

#[async_trait]
impl RecordStore for InMemoryStore {
    async fn load(&self) -> Result<Collection, AppError> {
        Ok(self.collection.read().await.clone())
    }

    async fn save(&self, collection: &Collection) -> Result<(), AppError> {
        *self.collection.write().await = collection.clone();
        Ok(())
    }
}
