use std::sync::Arc;

use lexica_dictionary::DictionaryApi;
use lexica_store::HistoryStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Recent-search history store.
    pub history: Arc<HistoryStore>,
    /// Client for the external dictionary service.
    pub dictionary: Arc<DictionaryApi>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
