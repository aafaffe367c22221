//! Route definitions for the search-history registry.

use axum::routing::get;
use axum::Router;

use crate::handlers::history;
use crate::state::AppState;

/// History routes mounted at `/history`.
///
/// ```text
/// GET    /   -> list_history
/// POST   /   -> add_history
/// DELETE /   -> clear_history
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(history::list_history)
            .post(history::add_history)
            .delete(history::clear_history),
    )
}
