//! Behavioural tests for the recent-search registry.

use assert_matches::assert_matches;

use lexica_core::error::CoreError;
use lexica_core::history::HISTORY_CAPACITY;
use lexica_core::types::Timestamp;
use lexica_store::HistoryStore;

fn ts(s: &str) -> Timestamp {
    s.parse().expect("valid RFC 3339 timestamp")
}

// ---------------------------------------------------------------------------
// Test: empty store lists as an empty sequence
// ---------------------------------------------------------------------------

#[tokio::test]
async fn empty_store_lists_empty() {
    let store = HistoryStore::new();

    assert!(store.list().await.is_empty());
}

// ---------------------------------------------------------------------------
// Test: listing is always sorted descending by timestamp
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_is_sorted_newest_first_regardless_of_insertion_order() {
    let store = HistoryStore::new();

    store.add("first", ts("2024-03-01T10:00:00Z")).await.unwrap();
    store.add("third", ts("2024-03-01T12:00:00Z")).await.unwrap();
    store.add("second", ts("2024-03-01T11:00:00Z")).await.unwrap();

    let words: Vec<_> = store.list().await.into_iter().map(|r| r.word).collect();
    assert_eq!(words, vec!["third", "second", "first"]);
}

// ---------------------------------------------------------------------------
// Test: re-searching a word replaces its record (case-insensitive)
// ---------------------------------------------------------------------------

#[tokio::test]
async fn re_adding_a_word_replaces_the_old_record() {
    let store = HistoryStore::new();

    let after_first = store.add("Hello", ts("2024-03-01T10:00:00Z")).await.unwrap();
    let first_id = after_first[0].id;

    store.add("world", ts("2024-03-01T11:00:00Z")).await.unwrap();
    let list = store.add("hello", ts("2024-03-01T12:00:00Z")).await.unwrap();

    // Exactly one record for hello remains, with the later timestamp and a
    // newer id; the original "Hello" record is gone, not updated in place.
    assert_eq!(list.len(), 2);
    assert_eq!(list[0].word, "hello");
    assert_eq!(list[0].timestamp, ts("2024-03-01T12:00:00Z"));
    assert!(list[0].id > first_id);
    assert_eq!(list[1].word, "world");
}

// ---------------------------------------------------------------------------
// Test: capacity is never exceeded; the oldest record is evicted
// ---------------------------------------------------------------------------

#[tokio::test]
async fn inserting_beyond_capacity_evicts_oldest() {
    let store = HistoryStore::new();

    // 21 distinct words with strictly increasing timestamps.
    for i in 1..=21 {
        let stamp = ts(&format!("2024-03-01T12:00:{:02}Z", i));
        let list = store.add(&format!("word{i}"), stamp).await.unwrap();
        assert!(list.len() <= HISTORY_CAPACITY);
    }

    let list = store.list().await;
    assert_eq!(list.len(), HISTORY_CAPACITY);

    // word21 (newest) is first, word2 is last, word1 is evicted.
    assert_eq!(list[0].word, "word21");
    assert_eq!(list[HISTORY_CAPACITY - 1].word, "word2");
    assert!(!list.iter().any(|r| r.word == "word1"));
}

// ---------------------------------------------------------------------------
// Test: clear removes everything regardless of prior state
// ---------------------------------------------------------------------------

#[tokio::test]
async fn clear_empties_the_store() {
    let store = HistoryStore::new();

    for i in 0..5 {
        let stamp = ts(&format!("2024-03-01T12:00:0{i}Z"));
        store.add(&format!("word{i}"), stamp).await.unwrap();
    }

    store.clear().await;

    assert!(store.list().await.is_empty());
}

// ---------------------------------------------------------------------------
// Test: adding an empty word fails and leaves the store unchanged
// ---------------------------------------------------------------------------

#[tokio::test]
async fn adding_empty_word_fails_with_invalid_input() {
    let store = HistoryStore::new();
    store.add("hello", ts("2024-03-01T10:00:00Z")).await.unwrap();

    let err = store.add("", ts("2024-03-01T11:00:00Z")).await.unwrap_err();
    assert_matches!(err, CoreError::InvalidInput(_));

    let err = store.add("   ", ts("2024-03-01T11:00:00Z")).await.unwrap_err();
    assert_matches!(err, CoreError::InvalidInput(_));

    let list = store.list().await;
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].word, "hello");
}

// ---------------------------------------------------------------------------
// Test: add returns the same view list() would
// ---------------------------------------------------------------------------

#[tokio::test]
async fn add_returns_the_post_insertion_list() {
    let store = HistoryStore::new();

    store.add("alpha", ts("2024-03-01T10:00:00Z")).await.unwrap();
    let returned = store.add("beta", ts("2024-03-01T11:00:00Z")).await.unwrap();

    assert_eq!(returned, store.list().await);
}

// ---------------------------------------------------------------------------
// Test: case is preserved in storage even though dedupe is case-insensitive
// ---------------------------------------------------------------------------

#[tokio::test]
async fn stored_word_preserves_submitted_case() {
    let store = HistoryStore::new();

    let list = store.add("HeLLo", ts("2024-03-01T10:00:00Z")).await.unwrap();

    assert_eq!(list[0].word, "HeLLo");
}
