//! Shortened-URL record and the collection persisted as one unit.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One shortened URL.
///
/// Records are created by the shortening service only and never mutated
/// afterwards. Field order here is the key order of the persisted document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlRecord {
    pub id: u64,
    pub original_url: String,
    pub short_code: String,
    pub short_url: String,
    pub created_at: NaiveDate,
}

impl UrlRecord {
    /// Creates a new record, deriving `short_url` from `base_url` and `short_code`.
    pub fn new(
        id: u64,
        original_url: String,
        short_code: String,
        base_url: &str,
        created_at: NaiveDate,
    ) -> Self {
        let short_url = format!("{}/{}", base_url.trim_end_matches('/'), short_code);

        Self {
            id,
            original_url,
            short_code,
            short_url,
            created_at,
        }
    }
}

/// All records in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    pub urls: Vec<UrlRecord>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// Id the next appended record receives.
    pub fn next_id(&self) -> u64 {
        self.urls.len() as u64 + 1
    }

    pub fn find_by_id(&self, id: u64) -> Option<&UrlRecord> {
        self.urls.iter().find(|r| r.id == id)
    }

    pub fn find_by_code(&self, code: &str) -> Option<&UrlRecord> {
        self.urls.iter().find(|r| r.short_code == code)
    }

    pub fn find_by_original_url(&self, original_url: &str) -> Option<&UrlRecord> {
        self.urls.iter().find(|r| r.original_url == original_url)
    }

    pub fn contains_code(&self, code: &str) -> bool {
        self.find_by_code(code).is_some()
    }

    /// Records created on `date`, in collection order.
    pub fn created_on(&self, date: NaiveDate) -> Vec<UrlRecord> {
        self.urls
            .iter()
            .filter(|r| r.created_at == date)
            .cloned()
            .collect()
    }
}
