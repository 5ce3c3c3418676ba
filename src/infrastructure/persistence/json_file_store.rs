//! JSON file implementation of the record store.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, error, info};

use crate::domain::entities::Collection;
use crate::domain::repositories::RecordStore;
use crate::error::AppError;

/// Stores the whole collection as one pretty-printed JSON document.
///
/// Saves go through a uniquely named sibling `.tmp` file that is renamed over
/// the target, so readers only ever observe a complete document.
///
/// Writes and the creation of a missing file are serialized per store (clones
/// share the lock). Creating the empty file never replaces a document another
/// caller saved in the meantime.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    io_lock: Arc<Mutex<()>>,
}

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

impl JsonFileStore {
    /// Creates a store backed by the file at `path`. The file is not touched
    /// until the first [`RecordStore::load`] or [`RecordStore::save`].
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            io_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `<file>.<pid>.<n>.tmp`, unique per save.
    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        let n = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
        name.push(format!(".{}.{}.tmp", std::process::id(), n));
        self.path.with_file_name(name)
    }

    async fn read(&self) -> Result<Option<Collection>, AppError> {
        match fs::read_to_string(&self.path).await {
            Ok(content) => {
                let collection: Collection = serde_json::from_str(&content).map_err(|e| {
                    error!(path = %self.path.display(), error = %e, "Failed to parse data file");
                    AppError::from(e)
                })?;
                debug!(records = collection.len(), "Loaded collection");
                Ok(Some(collection))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => {
                error!(path = %self.path.display(), error = %e, "Failed to read data file");
                Err(e.into())
            }
        }
    }

    /// Creates the data file with an empty collection unless someone else
    /// created it first, in which case their document is returned.
    async fn initialize(&self) -> Result<Collection, AppError> {
        let _guard = self.io_lock.lock().await;

        if let Some(collection) = self.read().await? {
            return Ok(collection);
        }

        info!(path = %self.path.display(), "Data file not found, creating empty collection");
        let collection = Collection::new();
        self.write_locked(&collection).await?;
        Ok(collection)
    }

    /// Caller must hold `io_lock`.
    async fn write_locked(&self, collection: &Collection) -> Result<(), AppError> {
        let json = serde_json::to_string_pretty(collection)?;
        let temp_path = self.temp_path();

        if let Err(e) = fs::write(&temp_path, json).await {
            error!(path = %temp_path.display(), error = %e, "Failed to write data file");
            let _ = fs::remove_file(&temp_path).await;
            return Err(e.into());
        }

        if let Err(e) = fs::rename(&temp_path, &self.path).await {
            error!(path = %self.path.display(), error = %e, "Failed to replace data file");
            let _ = fs::remove_file(&temp_path).await;
            return Err(e.into());
        }

        debug!(records = collection.len(), "Saved collection");
        Ok(())
    }
}

#[async_trait]
impl RecordStore for JsonFileStore {
    async fn load(&self) -> Result<Collection, AppError> {
        match self.read().await? {
            Some(collection) => Ok(collection),
            None => self.initialize().await,
        }
    }

    async fn save(&self, collection: &Collection) -> Result<(), AppError> {
        let _guard = self.io_lock.lock().await;
        self.write_locked(collection).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::UrlRecord;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn sample_record() -> UrlRecord {
        UrlRecord::new(
            1,
            "https://example.com".to_string(),
            "abcDEF".to_string(),
            "http://localhost:3000",
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_load_creates_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("database.json");
        let store = JsonFileStore::new(&path);

        let collection = store.load().await.unwrap();

        assert!(collection.is_empty());
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "{\n  \"urls\": []\n}");
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("database.json"));

        let mut collection = Collection::new();
        collection.urls.push(sample_record());
        store.save(&collection).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded, collection);
    }

    #[tokio::test]
    async fn test_save_uses_stable_key_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("database.json");
        let store = JsonFileStore::new(&path);

        let mut collection = Collection::new();
        collection.urls.push(sample_record());
        store.save(&collection).await.unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let id = content.find("\"id\"").unwrap();
        let original = content.find("\"originalUrl\"").unwrap();
        let code = content.find("\"shortCode\"").unwrap();
        let short_url = content.find("\"shortUrl\"").unwrap();
        let created = content.find("\"createdAt\"").unwrap();
        assert!(id < original && original < code && code < short_url && short_url < created);

        let leftovers = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(Result::ok)
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .count();
        assert_eq!(leftovers, 0);
    }

    #[test]
    fn test_temp_paths_are_unique() {
        let store = JsonFileStore::new("/data/database.json");

        let first = store.temp_path();
        let second = store.temp_path();

        assert_ne!(first, second);
        assert_eq!(first.parent(), Some(Path::new("/data")));
    }

    #[tokio::test]
    async fn test_initialize_keeps_document_saved_first() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("database.json");
        let store = JsonFileStore::new(&path);

        let mut collection = Collection::new();
        collection.urls.push(sample_record());
        store.save(&collection).await.unwrap();

        // Creation path re-checks under the lock and keeps the saved document.
        let initialized = store.initialize().await.unwrap();
        assert_eq!(initialized, collection);
        assert_eq!(store.load().await.unwrap(), collection);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_first_loads_never_clobber_a_save() {
        for _ in 0..50 {
            let dir = TempDir::new().unwrap();
            let store = JsonFileStore::new(dir.path().join("database.json"));

            let mut collection = Collection::new();
            collection.urls.push(sample_record());

            let mut readers = Vec::new();
            for _ in 0..4 {
                let store = store.clone();
                readers.push(tokio::spawn(async move { store.load().await }));
            }
            let writer = {
                let store = store.clone();
                let collection = collection.clone();
                tokio::spawn(async move { store.save(&collection).await })
            };

            writer.await.unwrap().unwrap();
            for reader in readers {
                reader.await.unwrap().unwrap();
            }

            assert_eq!(store.load().await.unwrap(), collection);
        }
    }

    #[tokio::test]
    async fn test_load_rejects_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("database.json");
        std::fs::write(&path, "{ definitely not json").unwrap();

        let result = JsonFileStore::new(&path).load().await;

        assert!(matches!(result, Err(AppError::Storage { .. })));
    }

    #[tokio::test]
    async fn test_save_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("missing").join("database.json"));

        let result = store.save(&Collection::new()).await;

        assert!(matches!(result, Err(AppError::Storage { .. })));
    }
}
