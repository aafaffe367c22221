//! Shared response types for API handlers.

use serde::Serialize;

/// Standard `{ "message": ... }` confirmation payload for operations that
/// have no entity body to return.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
