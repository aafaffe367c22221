//! The recent-search registry: a bounded, deduplicated, time-ordered list
//! of [`SearchRecord`]s.

use tokio::sync::RwLock;

use lexica_core::error::CoreError;
use lexica_core::history::{same_word, SearchRecord, HISTORY_CAPACITY};
use lexica_core::types::{DbId, Timestamp};

/// Stores recent searches in memory.
///
/// Thread-safe via interior `RwLock`; designed to be wrapped in `Arc` and
/// shared across the application.
///
/// Invariants maintained across all operations:
/// - at most one record per word (case-insensitive);
/// - never more than [`HISTORY_CAPACITY`] records;
/// - ids are assigned from a monotonically increasing counter, never reused.
pub struct HistoryStore {
    inner: RwLock<HistoryInner>,
}

struct HistoryInner {
    records: Vec<SearchRecord>,
    next_id: DbId,
}

impl HistoryStore {
    /// Create a new, empty store. Ids start at 1.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HistoryInner {
                records: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Return all records, most recent first.
    pub async fn list(&self) -> Vec<SearchRecord> {
        let inner = self.inner.read().await;
        sorted_newest_first(inner.records.clone())
    }

    /// Record a search for `word` at `timestamp`.
    ///
    /// Re-searching a word removes its old record and inserts a fresh one
    /// with a new id, promoting it to most-recent without growing the set.
    /// Inserting beyond capacity evicts the oldest records by timestamp.
    ///
    /// Returns the full post-insertion list, most recent first.
    pub async fn add(
        &self,
        word: &str,
        timestamp: Timestamp,
    ) -> Result<Vec<SearchRecord>, CoreError> {
        if word.trim().is_empty() {
            return Err(CoreError::InvalidInput(
                "word must not be empty".to_string(),
            ));
        }

        let mut inner = self.inner.write().await;

        inner.records.retain(|r| !same_word(&r.word, word));

        let id = inner.next_id;
        inner.next_id += 1;
        inner.records.push(SearchRecord {
            id,
            word: word.to_string(),
            timestamp,
        });

        if inner.records.len() > HISTORY_CAPACITY {
            let evicted = inner.records.len() - HISTORY_CAPACITY;
            inner.records = sorted_newest_first(std::mem::take(&mut inner.records));
            inner.records.truncate(HISTORY_CAPACITY);
            tracing::debug!(evicted, "Search history at capacity, evicted oldest records");
        }

        Ok(sorted_newest_first(inner.records.clone()))
    }

    /// Remove all records unconditionally.
    pub async fn clear(&self) {
        let mut inner = self.inner.write().await;
        inner.records.clear();
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Sort records descending by timestamp, ties broken by descending id so
/// listing order stays deterministic under coarse clocks.
fn sorted_newest_first(mut records: Vec<SearchRecord>) -> Vec<SearchRecord> {
    records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then(b.id.cmp(&a.id)));
    records
}
