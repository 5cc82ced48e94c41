//! Keyword entry model for persistence.
//!
//! One entry per stored `(keyword, url)` pair; created on a store command,
//! deleted on a delete command, otherwise immutable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored URL under a keyword, with who stored it and when.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordEntry {
    pub keyword: String,
    pub url: String,
    pub creator: String,
    pub stored_at: DateTime<Utc>,
}

impl KeywordEntry {
    /// Creates a new entry stamped with the current time.
    pub fn new(keyword: impl Into<String>, url: impl Into<String>, creator: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            url: url.into(),
            creator: creator.into(),
            stored_at: Utc::now(),
        }
    }

    /// Projects the attribution metadata out of the entry.
    pub fn attribution(&self) -> Attribution {
        Attribution {
            creator: self.creator.clone(),
            stored_at: self.stored_at,
        }
    }
}

/// Who stored a `(keyword, url)` pair and when.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribution {
    pub creator: String,
    pub stored_at: DateTime<Utc>,
}
