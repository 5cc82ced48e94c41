//! Integration tests for [`gifstore::RedisKeywordStore`].
//!
//! These need a live Redis at REDIS_URL (default redis://127.0.0.1/) and are
//! ignored by default; run with `cargo test -- --ignored`.

use gifstore::{KeywordStore, RedisKeywordStore};

async fn connect() -> RedisKeywordStore {
    let url = std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://127.0.0.1/".to_string());
    RedisKeywordStore::connect(&url)
        .await
        .expect("Failed to connect to Redis")
}

#[tokio::test]
#[ignore = "requires a running Redis server"]
async fn test_add_sample_remove_roundtrip() {
    let store = connect().await;
    let keyword = format!("it_{}", std::process::id());
    let url = "https://example.com/cat.gif";

    assert!(store.add(&keyword, url, "alice").await.unwrap());
    assert!(!store.add(&keyword, url, "bob").await.unwrap());

    assert_eq!(store.sample(&keyword).await.unwrap().as_deref(), Some(url));

    let attribution = store
        .attribution(&keyword, url)
        .await
        .unwrap()
        .expect("Attribution must exist");
    assert_eq!(attribution.creator, "alice");

    assert!(store.remove(&keyword, url).await.unwrap());
    assert!(!store.remove(&keyword, url).await.unwrap());
    assert!(store.sample(&keyword).await.unwrap().is_none());
    assert!(store.attribution(&keyword, url).await.unwrap().is_none());
}
