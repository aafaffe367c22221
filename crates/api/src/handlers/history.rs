//! Handlers for the recent-search history.
//!
//! History is kept in the in-process store held by [`AppState`]; all three
//! endpoints operate on the same registry instance.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /api/history
///
/// List all recorded searches, most recent first.
pub async fn list_history(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let records = state.history.list().await;

    Ok(Json(records))
}

/// POST /api/history
///
/// Record a search. The timestamp is assigned server-side at insertion.
/// Returns the full updated history, most recent first.
pub async fn add_history(
    State(state): State<AppState>,
    Json(input): Json<serde_json::Value>,
) -> AppResult<impl IntoResponse> {
    let word = input
        .get("word")
        .and_then(serde_json::Value::as_str)
        .ok_or_else(|| AppError::BadRequest("word is required and must be a string".into()))?;

    let records = state.history.add(word, Utc::now()).await?;

    tracing::info!(word = %word, count = records.len(), "Search recorded");

    Ok(Json(records))
}

/// DELETE /api/history
///
/// Remove all recorded searches unconditionally.
pub async fn clear_history(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    state.history.clear().await;

    tracing::info!("Search history cleared");

    Ok(Json(MessageResponse {
        message: "Search history cleared".to_string(),
    }))
}
