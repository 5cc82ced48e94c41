//! The [`KeywordStore`] trait: keyword-to-URL persistence interface.
//!
//! Implemented by the in-memory, sled, SQLite and Redis backends. All
//! operations are single-key and single-round-trip; there are no cross-key
//! transactions. Uniqueness invariant: a `(keyword, url)` pair appears at
//! most once.

use async_trait::async_trait;

use crate::entry::{Attribution, KeywordEntry};
use crate::error::StoreError;

/// Trait for storing and retrieving keyword/URL entries.
#[async_trait]
pub trait KeywordStore: Send + Sync {
    /// Stores a URL under a keyword. Returns `false` (no-op) when the
    /// `(keyword, url)` pair already exists; the original creator and
    /// timestamp are kept.
    async fn add(&self, keyword: &str, url: &str, creator: &str) -> Result<bool, StoreError>;

    /// Removes a `(keyword, url)` pair. Returns `false` (no-op, not an
    /// error) when the pair does not exist.
    async fn remove(&self, keyword: &str, url: &str) -> Result<bool, StoreError>;

    /// Picks a uniformly random URL stored under the keyword. `None` when
    /// the keyword has no entries.
    async fn sample(&self, keyword: &str) -> Result<Option<String>, StoreError>;

    /// Returns who stored the pair and when, or `None` when unknown.
    async fn attribution(&self, keyword: &str, url: &str)
        -> Result<Option<Attribution>, StoreError>;

    /// Lists every entry stored under the keyword (admin/CLI use).
    async fn entries(&self, keyword: &str) -> Result<Vec<KeywordEntry>, StoreError>;
}
