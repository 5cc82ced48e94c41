//! Relational keyword store on SQLite via sqlx.
//!
//! Schema bootstrap is idempotent (`CREATE TABLE IF NOT EXISTS`) and runs
//! once at construction. Dedup of `(keyword, url)` pairs is the composite
//! primary key plus `INSERT OR IGNORE`, so a duplicate add never overwrites
//! the original creator or timestamp.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{sqlite::SqliteConnectOptions, SqlitePool};
use tracing::info;

use crate::entry::{Attribution, KeywordEntry};
use crate::error::StoreError;
use crate::store::KeywordStore;

/// SQLite-backed keyword store.
#[derive(Clone)]
pub struct SqliteKeywordStore {
    pool: SqlitePool,
}

#[derive(sqlx::FromRow)]
struct EntryRow {
    keyword: String,
    url: String,
    creator: String,
    stored_at: DateTime<Utc>,
}

impl From<EntryRow> for KeywordEntry {
    fn from(row: EntryRow) -> Self {
        KeywordEntry {
            keyword: row.keyword,
            url: row.url,
            creator: row.creator,
            stored_at: row.stored_at,
        }
    }
}

impl SqliteKeywordStore {
    /// Creates a store for the given database file path, creating the file
    /// and schema if missing.
    pub async fn new(database_url: &str) -> Result<Self, StoreError> {
        info!(database_url = %database_url, "initializing SQLite keyword store");

        let options = SqliteConnectOptions::new()
            .create_if_missing(true)
            .filename(database_url);

        let pool = SqlitePool::connect_with(options).await?;
        let store = Self { pool };
        store.init().await?;
        Ok(store)
    }

    async fn init(&self) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS keyword_entries (
                keyword TEXT NOT NULL,
                url TEXT NOT NULL,
                creator TEXT NOT NULL,
                stored_at TEXT NOT NULL,
                PRIMARY KEY (keyword, url)
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_keyword_entries_keyword ON keyword_entries(keyword)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl KeywordStore for SqliteKeywordStore {
    async fn add(&self, keyword: &str, url: &str, creator: &str) -> Result<bool, StoreError> {
        let result = sqlx::query(
            r#"
            INSERT OR IGNORE INTO keyword_entries (keyword, url, creator, stored_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(keyword)
        .bind(url)
        .bind(creator)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        let inserted = result.rows_affected() > 0;
        if inserted {
            info!(keyword = %keyword, url = %url, "stored entry (sqlite)");
        }
        Ok(inserted)
    }

    async fn remove(&self, keyword: &str, url: &str) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM keyword_entries WHERE keyword = ? AND url = ?")
            .bind(keyword)
            .bind(url)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn sample(&self, keyword: &str) -> Result<Option<String>, StoreError> {
        let url: Option<(String,)> = sqlx::query_as(
            "SELECT url FROM keyword_entries WHERE keyword = ? ORDER BY RANDOM() LIMIT 1",
        )
        .bind(keyword)
        .fetch_optional(&self.pool)
        .await?;
        Ok(url.map(|(u,)| u))
    }

    async fn attribution(
        &self,
        keyword: &str,
        url: &str,
    ) -> Result<Option<Attribution>, StoreError> {
        let row: Option<(String, DateTime<Utc>)> = sqlx::query_as(
            "SELECT creator, stored_at FROM keyword_entries WHERE keyword = ? AND url = ?",
        )
        .bind(keyword)
        .bind(url)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(|(creator, stored_at)| Attribution { creator, stored_at }))
    }

    async fn entries(&self, keyword: &str) -> Result<Vec<KeywordEntry>, StoreError> {
        let rows: Vec<EntryRow> = sqlx::query_as(
            "SELECT keyword, url, creator, stored_at FROM keyword_entries WHERE keyword = ? ORDER BY stored_at",
        )
        .bind(keyword)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(KeywordEntry::from).collect())
    }
}
