use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid change number: {0}")]
    InvalidChangeNumber(String),
    #[error("invalid account id: {0}")]
    InvalidAccountId(String),
    #[error("invalid revision id: {0}")]
    InvalidRevisionId(String),
    #[error("deserialization error: {0}")]
    Deserialization(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
