//! Remote keyword store on Redis.
//!
//! URLs for a keyword live in the set `gif_{keyword}` (SADD / SREM /
//! SRANDMEMBER give the dedup, delete and random-sample semantics for free).
//! Attribution lives in a hash per pair, `gifmeta_{keyword}:{url}`, with
//! `creator` and `stored_at` (RFC 3339) fields; it is written only when the
//! pair is new and deleted together with the set member.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use tracing::info;

use crate::entry::{Attribution, KeywordEntry};
use crate::error::StoreError;
use crate::store::KeywordStore;

/// Redis-backed keyword store. Connection loss surfaces as
/// [`StoreError::Backend`]; reconnection is the ConnectionManager's problem.
#[derive(Clone)]
pub struct RedisKeywordStore {
    conn: ConnectionManager,
}

fn set_key(keyword: &str) -> String {
    format!("gif_{keyword}")
}

fn meta_key(keyword: &str, url: &str) -> String {
    format!("gifmeta_{keyword}:{url}")
}

fn parse_stored_at(raw: &str) -> Result<DateTime<Utc>, StoreError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| StoreError::Serialization(format!("bad stored_at '{raw}': {e}")))
}

impl RedisKeywordStore {
    /// Connects to the Redis server at the given URL.
    pub async fn connect(redis_url: &str) -> Result<Self, StoreError> {
        let client = redis::Client::open(redis_url)?;
        let conn = ConnectionManager::new(client).await?;
        info!(redis_url = %redis_url, "connected Redis keyword store");
        Ok(Self { conn })
    }
}

#[async_trait]
impl KeywordStore for RedisKeywordStore {
    async fn add(&self, keyword: &str, url: &str, creator: &str) -> Result<bool, StoreError> {
        let mut conn = self.conn.clone();
        let added: i64 = conn.sadd(set_key(keyword), url).await?;
        if added == 0 {
            // Pair already present; keep the original attribution.
            return Ok(false);
        }
        let fields = [
            ("creator", creator.to_string()),
            ("stored_at", Utc::now().to_rfc3339()),
        ];
        let _: () = conn.hset_multiple(meta_key(keyword, url), &fields).await?;
        info!(keyword = %keyword, url = %url, "stored entry (redis)");
        Ok(true)
    }

    async fn remove(&self, keyword: &str, url: &str) -> Result<bool, StoreError> {
        let mut conn = self.conn.clone();
        let removed: i64 = conn.srem(set_key(keyword), url).await?;
        let _: () = conn.del(meta_key(keyword, url)).await?;
        Ok(removed > 0)
    }

    async fn sample(&self, keyword: &str) -> Result<Option<String>, StoreError> {
        let mut conn = self.conn.clone();
        let url: Option<String> = conn.srandmember(set_key(keyword)).await?;
        Ok(url)
    }

    async fn attribution(
        &self,
        keyword: &str,
        url: &str,
    ) -> Result<Option<Attribution>, StoreError> {
        let mut conn = self.conn.clone();
        let raw: std::collections::HashMap<String, String> =
            conn.hgetall(meta_key(keyword, url)).await?;
        let (Some(creator), Some(stored_at)) = (raw.get("creator"), raw.get("stored_at")) else {
            return Ok(None);
        };
        Ok(Some(Attribution {
            creator: creator.clone(),
            stored_at: parse_stored_at(stored_at)?,
        }))
    }

    async fn entries(&self, keyword: &str) -> Result<Vec<KeywordEntry>, StoreError> {
        let mut conn = self.conn.clone();
        let urls: Vec<String> = conn.smembers(set_key(keyword)).await?;
        let mut found = Vec::with_capacity(urls.len());
        for url in urls {
            if let Some(attribution) = self.attribution(keyword, &url).await? {
                found.push(KeywordEntry {
                    keyword: keyword.to_string(),
                    url,
                    creator: attribution.creator,
                    stored_at: attribution.stored_at,
                });
            }
        }
        Ok(found)
    }
}
