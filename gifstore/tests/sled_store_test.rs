//! Tests for [`gifstore::SledKeywordStore`] against a temporary directory.

use gifstore::{KeywordStore, SledKeywordStore};

fn temp_store() -> (tempfile::TempDir, SledKeywordStore) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let store = SledKeywordStore::open(dir.path().join("gifbot.sled").to_str().unwrap())
        .expect("Failed to open sled store");
    (dir, store)
}

#[tokio::test]
async fn test_double_store_yields_one_entry() {
    let (_dir, store) = temp_store();

    assert!(store
        .add("cats", "https://example.com/cat.gif", "alice")
        .await
        .unwrap());
    assert!(!store
        .add("cats", "https://example.com/cat.gif", "bob")
        .await
        .unwrap());

    let entries = store.entries("cats").await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].creator, "alice");
}

#[tokio::test]
async fn test_sample_empty_keyword_is_none() {
    let (_dir, store) = temp_store();
    assert!(store.sample("nothing").await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_nonexistent_is_noop() {
    let (_dir, store) = temp_store();
    assert!(!store
        .remove("cats", "https://example.com/none.gif")
        .await
        .unwrap());
}

#[tokio::test]
async fn test_attribution_roundtrip() {
    let (_dir, store) = temp_store();
    store
        .add("cats", "https://example.com/cat.gif", "alice")
        .await
        .unwrap();

    let attribution = store
        .attribution("cats", "https://example.com/cat.gif")
        .await
        .unwrap()
        .expect("Attribution must exist");
    assert_eq!(attribution.creator, "alice");

    assert!(store
        .remove("cats", "https://example.com/cat.gif")
        .await
        .unwrap());
    assert!(store
        .attribution("cats", "https://example.com/cat.gif")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_prefix_scan_does_not_leak_across_keywords() {
    let (_dir, store) = temp_store();
    // "cat" must not see entries stored under "cats".
    store
        .add("cats", "https://example.com/cat.gif", "alice")
        .await
        .unwrap();

    assert!(store.sample("cat").await.unwrap().is_none());
    assert!(store.entries("cat").await.unwrap().is_empty());
    assert_eq!(store.entries("cats").await.unwrap().len(), 1);
}
