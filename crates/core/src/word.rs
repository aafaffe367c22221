//! Dictionary entry value types.
//!
//! These mirror the wire format of the external dictionary service. Entries
//! are read-only to this system: deserialized from the upstream response and
//! re-serialized to the client without interpretation.

use serde::{Deserialize, Serialize};

/// One dictionary entry for a word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    /// The (normalized) word this entry defines.
    pub word: String,
    /// Phonetic spelling, e.g. `/həˈləʊ/`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phonetic: Option<String>,
    /// Alternative phonetic renderings, possibly with audio.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub phonetics: Vec<Phonetic>,
    /// Etymology text, when the upstream provides one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    /// Senses grouped by part of speech. Non-empty for a valid entry.
    pub meanings: Vec<Meaning>,
}

/// A phonetic rendering, optionally with a pronunciation audio URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phonetic {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<String>,
}

/// All senses of a word for one part of speech.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meaning {
    /// Part-of-speech tag, e.g. `noun`, `verb`.
    pub part_of_speech: String,
    pub definitions: Vec<Definition>,
}

/// A single definition with optional usage example and word lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Definition {
    pub definition: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub synonyms: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub antonyms: Vec<String>,
}

/// Normalize a lookup query into the form the upstream service expects.
///
/// - Trims surrounding whitespace.
/// - Lowercases (the upstream is keyed by lowercase English words).
/// - Empty or whitespace-only input returns `None`.
///
/// # Examples
///
/// ```
/// use lexica_core::word::normalize_word;
/// assert_eq!(normalize_word("  Hello "), Some("hello".to_string()));
/// assert_eq!(normalize_word("   "), None);
/// ```
pub fn normalize_word(query: &str) -> Option<String> {
    let word = query.trim().to_lowercase();
    if word.is_empty() {
        None
    } else {
        Some(word)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
