pub mod dictionary;
pub mod health;
pub mod history;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /dictionary/{word}          look up a word (GET)
///
/// /history                    list recent searches (GET)
/// /history                    record a search (POST)
/// /history                    clear history (DELETE)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/dictionary", dictionary::router())
        .nest("/history", history::router())
}
