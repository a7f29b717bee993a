use thiserror::Error;

#[derive(Error, Debug)]
pub enum TasteError {
    #[error("profile serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("storage backend error: {0}")]
    Storage(String),
}
