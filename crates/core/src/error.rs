#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No dictionary entry for '{word}'")]
    NotFound { word: String },

    #[error("Upstream dictionary error: {0}")]
    Upstream(String),

    #[error("Storage error: {0}")]
    Storage(String),
}
