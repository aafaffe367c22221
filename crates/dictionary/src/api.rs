//! REST API client for the external dictionary lookup service.
//!
//! Wraps the public dictionary HTTP API (lookup by English word) using
//! [`reqwest`]. The upstream returns a JSON array of candidate entries per
//! word; [`DictionaryApi::lookup`] keeps only the first.

use lexica_core::word::{normalize_word, Word};

/// HTTP client for the external dictionary service.
pub struct DictionaryApi {
    client: reqwest::Client,
    api_url: String,
}

/// Errors from the dictionary API layer.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryApiError {
    /// The query was empty after normalization.
    #[error("Invalid word: {0}")]
    InvalidWord(String),

    /// The upstream has no entry for the word.
    #[error("No dictionary entry found for '{0}'")]
    NotFound(String),

    /// The HTTP request itself failed (network, DNS, TLS, timeout) or the
    /// response body could not be parsed.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The upstream returned an unexpected non-2xx status code.
    #[error("Dictionary API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl DictionaryApi {
    /// Create a new client for the dictionary service.
    ///
    /// * `api_url` - Base lookup URL, e.g.
    ///   `https://api.dictionaryapi.dev/api/v2/entries/en`.
    pub fn new(api_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`] (useful to
    /// apply a configured request timeout, or to share connection pools).
    pub fn with_client(client: reqwest::Client, api_url: String) -> Self {
        Self { client, api_url }
    }

    /// Look up a word and return its first dictionary entry.
    ///
    /// The query is trimmed and lowercased before the request. A 404 from
    /// the upstream means the word has no entry. When the upstream returns
    /// several candidate entries, only the first is kept.
    ///
    /// Failures are surfaced immediately; no retries are attempted.
    pub async fn lookup(&self, query: &str) -> Result<Word, DictionaryApiError> {
        let word = normalize_word(query).ok_or_else(|| {
            DictionaryApiError::InvalidWord("word must not be empty".to_string())
        })?;

        let response = self
            .client
            .get(format!("{}/{}", self.api_url, word))
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(DictionaryApiError::NotFound(word));
        }

        let response = Self::ensure_success(response).await?;
        let entries: Vec<Word> = response.json().await?;

        let count = entries.len();
        match entries.into_iter().next() {
            // A 200 with no candidate entries still means the word is not defined.
            None => Err(DictionaryApiError::NotFound(word)),
            Some(entry) => {
                if count > 1 {
                    tracing::debug!(
                        word = %word,
                        discarded = count - 1,
                        "Upstream returned multiple entries, keeping the first",
                    );
                }
                Ok(entry)
            }
        }
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the response
    /// unchanged on success, or a [`DictionaryApiError::ApiError`] containing
    /// the status and body text on failure.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, DictionaryApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(DictionaryApiError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}
