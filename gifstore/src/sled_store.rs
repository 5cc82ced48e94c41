//! Embedded keyword store on sled.
//!
//! One key per `(keyword, url)` pair: `"{keyword}\x1f{url}"`, value the
//! JSON-serialized [`KeywordEntry`]. The 0x1f unit separator cannot appear in
//! a keyword or URL (command patterns reject spaces and the transport never
//! delivers control characters), so prefix scans per keyword are exact.

use async_trait::async_trait;
use rand::seq::SliceRandom;
use tracing::info;

use crate::entry::{Attribution, KeywordEntry};
use crate::error::StoreError;
use crate::store::KeywordStore;

const KEY_SEPARATOR: char = '\x1f';

/// Sled-backed keyword store; a single tree holds every entry.
#[derive(Clone)]
pub struct SledKeywordStore {
    db: sled::Db,
}

impl SledKeywordStore {
    /// Opens (or creates) the sled database at the given path.
    pub fn open(path: &str) -> Result<Self, StoreError> {
        let db = sled::open(path)?;
        info!(path = %path, "opened sled keyword store");
        Ok(Self { db })
    }

    fn entry_key(keyword: &str, url: &str) -> Vec<u8> {
        format!("{keyword}{KEY_SEPARATOR}{url}").into_bytes()
    }

    fn keyword_prefix(keyword: &str) -> Vec<u8> {
        format!("{keyword}{KEY_SEPARATOR}").into_bytes()
    }

    fn scan_keyword(&self, keyword: &str) -> Result<Vec<KeywordEntry>, StoreError> {
        let mut found = Vec::new();
        for item in self.db.scan_prefix(Self::keyword_prefix(keyword)) {
            let (_, value) = item?;
            let entry: KeywordEntry = serde_json::from_slice(&value)?;
            found.push(entry);
        }
        Ok(found)
    }
}

#[async_trait]
impl KeywordStore for SledKeywordStore {
    async fn add(&self, keyword: &str, url: &str, creator: &str) -> Result<bool, StoreError> {
        let key = Self::entry_key(keyword, url);
        if self.db.contains_key(&key)? {
            return Ok(false);
        }
        let entry = KeywordEntry::new(keyword, url, creator);
        self.db.insert(key, serde_json::to_vec(&entry)?)?;
        self.db.flush_async().await?;
        info!(keyword = %keyword, url = %url, "stored entry (sled)");
        Ok(true)
    }

    async fn remove(&self, keyword: &str, url: &str) -> Result<bool, StoreError> {
        let removed = self.db.remove(Self::entry_key(keyword, url))?.is_some();
        if removed {
            self.db.flush_async().await?;
        }
        Ok(removed)
    }

    async fn sample(&self, keyword: &str) -> Result<Option<String>, StoreError> {
        let entries = self.scan_keyword(keyword)?;
        Ok(entries
            .choose(&mut rand::thread_rng())
            .map(|e| e.url.clone()))
    }

    async fn attribution(
        &self,
        keyword: &str,
        url: &str,
    ) -> Result<Option<Attribution>, StoreError> {
        let value = self.db.get(Self::entry_key(keyword, url))?;
        let attribution = match value {
            Some(bytes) => {
                let entry: KeywordEntry = serde_json::from_slice(&bytes)?;
                Some(entry.attribution())
            }
            None => None,
        };
        Ok(attribution)
    }

    async fn entries(&self, keyword: &str) -> Result<Vec<KeywordEntry>, StoreError> {
        self.scan_keyword(keyword)
    }
}
