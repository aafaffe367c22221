//! In-memory search-history storage.
//!
//! The store is process-lifetime state with no persistence guarantee across
//! restarts. It is designed to be wrapped in `Arc` and handed to request
//! handlers, so a persistent backend can be swapped in behind the same
//! interface without touching the handlers.

pub mod history;

pub use history::HistoryStore;
