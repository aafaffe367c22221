//! Handlers for dictionary lookups.
//!
//! A lookup is a direct pass-through to the external dictionary service --
//! no caching, no retries. Recording the search in history is a separate,
//! client-initiated POST to `/api/history`.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/dictionary/{word}
///
/// Look up a word and return its first dictionary entry.
pub async fn lookup_word(
    State(state): State<AppState>,
    Path(word): Path<String>,
) -> AppResult<impl IntoResponse> {
    let entry = state.dictionary.lookup(&word).await?;

    Ok(Json(entry))
}
