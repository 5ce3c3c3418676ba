//! Link creation and retrieval service.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use serde_json::json;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::domain::entities::{Collection, UrlRecord};
use crate::domain::repositories::RecordStore;
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, is_reserved};
use crate::utils::date_filter::parse_date_filter;

/// Default number of short-code draws before giving up.
pub const DEFAULT_MAX_CODE_ATTEMPTS: usize = 5;

/// Service for creating and retrieving shortened links.
///
/// Handles input validation, code generation and deduplication by original
/// URL. Every call loads the whole collection from the injected store.
///
/// `shorten` serializes its load-modify-save cycle behind a mutex, so
/// concurrent creates in one process never lose a write or reuse an id.
/// Lookups take no lock.
pub struct LinkService<S: RecordStore + ?Sized> {
    store: Arc<S>,
    base_url: String,
    max_code_attempts: usize,
    code_generator: fn() -> String,
    write_lock: Mutex<()>,
}

impl<S: RecordStore + ?Sized> LinkService<S> {
    /// Creates a new link service.
    ///
    /// `base_url` is the public address short URLs are built from, e.g.
    /// `http://localhost:3000`.
    pub fn new(store: Arc<S>, base_url: impl Into<String>) -> Self {
        Self {
            store,
            base_url: base_url.into(),
            max_code_attempts: DEFAULT_MAX_CODE_ATTEMPTS,
            code_generator: generate_code,
            write_lock: Mutex::new(()),
        }
    }

    /// Overrides the number of short-code draws per create (minimum 1).
    pub fn with_max_code_attempts(mut self, attempts: usize) -> Self {
        self.max_code_attempts = attempts.max(1);
        self
    }

    /// Replaces the random code source.
    pub fn with_code_generator(mut self, generator: fn() -> String) -> Self {
        self.code_generator = generator;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Shortens `original_url`, or returns the record that already exists for it.
    ///
    /// # Deduplication
    ///
    /// If a record with exactly this `original_url` exists it is returned
    /// unchanged, including its original `created_at`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `original_url` is empty.
    /// Returns [`AppError::CodeGenerationExhausted`] if no unique code was
    /// found within the attempt budget.
    /// Returns [`AppError::Storage`] on persistence failures.
    pub async fn shorten(&self, original_url: &str) -> Result<UrlRecord, AppError> {
        if original_url.is_empty() {
            return Err(AppError::bad_request(
                "URL is required",
                json!({ "field": "url" }),
            ));
        }

        let _guard = self.write_lock.lock().await;

        let mut collection = self.store.load().await?;

        if let Some(existing) = collection.find_by_original_url(original_url) {
            debug!(id = existing.id, code = %existing.short_code, "URL already shortened");
            return Ok(existing.clone());
        }

        let code = self.generate_unique_code(&collection)?;

        let record = UrlRecord::new(
            collection.next_id(),
            original_url.to_string(),
            code,
            &self.base_url,
            today(),
        );

        collection.urls.push(record.clone());
        self.store.save(&collection).await?;

        info!(id = record.id, code = %record.short_code, "Short link created");

        Ok(record)
    }

    /// Finds a record by its numeric id.
    pub async fn get_by_id(&self, id: u64) -> Result<Option<UrlRecord>, AppError> {
        let collection = self.store.load().await?;
        Ok(collection.find_by_id(id).cloned())
    }

    /// Returns every record created on `date` (`YYYY-MM-DD`), in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `date` is not shaped `YYYY-MM-DD`.
    pub async fn get_by_date(&self, date: &str) -> Result<Vec<UrlRecord>, AppError> {
        let date = parse_date_filter(date)?;
        let collection = self.store.load().await?;

        // Shape-valid but impossible days (`2024-02-30`) match nothing.
        Ok(date.map(|d| collection.created_on(d)).unwrap_or_default())
    }

    /// Finds a record by its short code.
    pub async fn get_by_short_code(&self, code: &str) -> Result<Option<UrlRecord>, AppError> {
        let collection = self.store.load().await?;
        Ok(collection.find_by_code(code).cloned())
    }

    /// Number of stored records.
    pub async fn count(&self) -> Result<usize, AppError> {
        Ok(self.store.load().await?.len())
    }

    fn generate_unique_code(&self, collection: &Collection) -> Result<String, AppError> {
        for attempt in 1..=self.max_code_attempts {
            let code = (self.code_generator)();

            if is_reserved(&code) || collection.contains_code(&code) {
                warn!(attempt, code = %code, "Short code collision, retrying");
                continue;
            }

            return Ok(code);
        }

        Err(AppError::code_generation_exhausted(
            "Failed to generate unique code",
            json!({ "attempts": self.max_code_attempts }),
        ))
    }
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}
