//! Store configuration and backend factory.
//!
//! Loaded from environment variables at startup only: STORE_BACKEND selects
//! the backend, DATABASE_URL / SLED_PATH / REDIS_URL point at it.

use std::env;
use std::sync::Arc;

use tracing::info;

use crate::error::StoreError;
use crate::memory::InMemoryKeywordStore;
use crate::redis_store::RedisKeywordStore;
use crate::sled_store::SledKeywordStore;
use crate::sqlite_store::SqliteKeywordStore;
use crate::store::KeywordStore;

/// Which persistence backend to run against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Memory,
    Sled,
    Sqlite,
    Redis,
}

impl StoreBackend {
    fn parse(raw: &str) -> Result<Self, StoreError> {
        match raw {
            "memory" => Ok(Self::Memory),
            "sled" => Ok(Self::Sled),
            "sqlite" => Ok(Self::Sqlite),
            "redis" => Ok(Self::Redis),
            other => Err(StoreError::Backend(format!(
                "unknown STORE_BACKEND '{other}' (expected memory|sled|sqlite|redis)"
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Memory => "memory",
            Self::Sled => "sled",
            Self::Sqlite => "sqlite",
            Self::Redis => "redis",
        }
    }
}

/// Store config loaded from environment variables.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// STORE_BACKEND; defaults to sqlite.
    pub backend: StoreBackend,
    /// DATABASE_URL; SQLite database file path.
    pub database_url: String,
    /// SLED_PATH; sled database directory.
    pub sled_path: String,
    /// REDIS_URL; redis:// connection string.
    pub redis_url: String,
}

impl StoreConfig {
    /// Loads from environment variables; every variable has a default except
    /// that an unknown STORE_BACKEND is an error.
    pub fn from_env() -> Result<Self, StoreError> {
        let backend = match env::var("STORE_BACKEND") {
            Ok(raw) => StoreBackend::parse(&raw)?,
            Err(_) => StoreBackend::Sqlite,
        };
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "./data/gifbot.db".to_string());
        let sled_path = env::var("SLED_PATH").unwrap_or_else(|_| "./data/gifbot.sled".to_string());
        let redis_url =
            env::var("REDIS_URL").unwrap_or_else(|_| "redis://127.0.0.1/".to_string());
        Ok(Self {
            backend,
            database_url,
            sled_path,
            redis_url,
        })
    }
}

/// Creates the keyword store selected by the config.
pub async fn create_keyword_store(
    config: &StoreConfig,
) -> Result<Arc<dyn KeywordStore>, StoreError> {
    let store: Arc<dyn KeywordStore> = match config.backend {
        StoreBackend::Memory => {
            info!("using in-memory keyword store");
            Arc::new(InMemoryKeywordStore::new())
        }
        StoreBackend::Sled => {
            info!(path = %config.sled_path, "using sled keyword store");
            Arc::new(SledKeywordStore::open(&config.sled_path)?)
        }
        StoreBackend::Sqlite => {
            info!(database_url = %config.database_url, "using SQLite keyword store");
            Arc::new(SqliteKeywordStore::new(&config.database_url).await?)
        }
        StoreBackend::Redis => {
            info!(redis_url = %config.redis_url, "using Redis keyword store");
            Arc::new(RedisKeywordStore::connect(&config.redis_url).await?)
        }
    };
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_parse() {
        assert_eq!(StoreBackend::parse("memory").unwrap(), StoreBackend::Memory);
        assert_eq!(StoreBackend::parse("sled").unwrap(), StoreBackend::Sled);
        assert_eq!(StoreBackend::parse("sqlite").unwrap(), StoreBackend::Sqlite);
        assert_eq!(StoreBackend::parse("redis").unwrap(), StoreBackend::Redis);
        assert!(StoreBackend::parse("bolt").is_err());
    }
}
