//! Gifstore crate: keyword-to-URL persistence behind a single trait.
//!
//! ## Modules
//!
//! - [`error`] – StoreError
//! - [`entry`] – KeywordEntry, Attribution
//! - [`store`] – KeywordStore trait
//! - [`memory`] – InMemoryKeywordStore
//! - [`sled_store`] – SledKeywordStore (embedded)
//! - [`sqlite_store`] – SqliteKeywordStore (relational)
//! - [`redis_store`] – RedisKeywordStore (remote set/cache)
//! - [`config`] – StoreConfig and the backend factory

mod config;
mod entry;
mod error;
mod memory;
mod redis_store;
mod sled_store;
mod sqlite_store;
mod store;

pub use config::{create_keyword_store, StoreBackend, StoreConfig};
pub use entry::{Attribution, KeywordEntry};
pub use error::StoreError;
pub use memory::InMemoryKeywordStore;
pub use redis_store::RedisKeywordStore;
pub use sled_store::SledKeywordStore;
pub use sqlite_store::SqliteKeywordStore;
pub use store::KeywordStore;
