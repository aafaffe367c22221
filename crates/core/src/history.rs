//! Search-history domain types and constants.
//!
//! This module lives in `core` (zero internal deps) so it can be used by
//! both the store and the API layer.

use serde::{Deserialize, Serialize};

use crate::types::{DbId, Timestamp};

/// Maximum number of records the search history retains. Inserting beyond
/// this bound evicts the oldest records by timestamp.
pub const HISTORY_CAPACITY: usize = 20;

/// One completed search, as stored in the history and returned by the API.
///
/// The `word` preserves the case the client submitted; deduplication is
/// case-insensitive (see [`same_word`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRecord {
    /// Sequential identifier, assigned at insertion, never reused.
    pub id: DbId,
    /// The searched word, case-preserved as submitted.
    pub word: String,
    /// When the search was recorded (ISO-8601 on the wire).
    pub timestamp: Timestamp,
}

/// Case-insensitive word equality used for history deduplication.
///
/// # Examples
///
/// ```
/// use lexica_core::history::same_word;
/// assert!(same_word("Hello", "hello"));
/// assert!(!same_word("hello", "world"));
/// ```
pub fn same_word(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
