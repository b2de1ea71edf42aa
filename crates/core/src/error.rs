use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssetGraphError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid item keys: {0}")]
    InvalidKeys(String),
    #[error("Invalid items document: {0}")]
    InvalidItems(String),
}

pub type Result<T> = std::result::Result<T, AssetGraphError>;
