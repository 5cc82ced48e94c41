//! In-memory keyword store for tests and throwaway runs.
//!
//! Data is lost on restart. Thread safety via `Arc<RwLock<..>>`; cloning the
//! store shares the underlying map.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use rand::seq::SliceRandom;
use tokio::sync::RwLock;
use tracing::info;

use crate::entry::{Attribution, KeywordEntry};
use crate::error::StoreError;
use crate::store::KeywordStore;

/// In-memory keyword store; keyword -> entries, deduplicated by URL.
#[derive(Debug, Clone, Default)]
pub struct InMemoryKeywordStore {
    entries: Arc<RwLock<HashMap<String, Vec<KeywordEntry>>>>,
}

impl InMemoryKeywordStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of keywords with at least one entry.
    pub async fn keyword_count(&self) -> usize {
        self.entries.read().await.len()
    }
}

#[async_trait]
impl KeywordStore for InMemoryKeywordStore {
    async fn add(&self, keyword: &str, url: &str, creator: &str) -> Result<bool, StoreError> {
        let mut entries = self.entries.write().await;
        let bucket = entries.entry(keyword.to_string()).or_default();
        if bucket.iter().any(|e| e.url == url) {
            return Ok(false);
        }
        bucket.push(KeywordEntry::new(keyword, url, creator));
        info!(keyword = %keyword, url = %url, "stored entry (memory)");
        Ok(true)
    }

    async fn remove(&self, keyword: &str, url: &str) -> Result<bool, StoreError> {
        let mut entries = self.entries.write().await;
        let Some(bucket) = entries.get_mut(keyword) else {
            return Ok(false);
        };
        let before = bucket.len();
        bucket.retain(|e| e.url != url);
        let removed = bucket.len() < before;
        // Keep the "zero entries == nonexistent keyword" invariant visible.
        if bucket.is_empty() {
            entries.remove(keyword);
        }
        Ok(removed)
    }

    async fn sample(&self, keyword: &str) -> Result<Option<String>, StoreError> {
        let entries = self.entries.read().await;
        let url = entries
            .get(keyword)
            .and_then(|bucket| bucket.choose(&mut rand::thread_rng()))
            .map(|e| e.url.clone());
        Ok(url)
    }

    async fn attribution(
        &self,
        keyword: &str,
        url: &str,
    ) -> Result<Option<Attribution>, StoreError> {
        let entries = self.entries.read().await;
        let attribution = entries
            .get(keyword)
            .and_then(|bucket| bucket.iter().find(|e| e.url == url))
            .map(|e| e.attribution());
        Ok(attribution)
    }

    async fn entries(&self, keyword: &str) -> Result<Vec<KeywordEntry>, StoreError> {
        let entries = self.entries.read().await;
        Ok(entries.get(keyword).cloned().unwrap_or_default())
    }
}
