use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("assignee takes at most one account, got {0}")]
    InvalidAssignee(usize),
    #[error("account has no id, email or username to address it by")]
    UnaddressableAccount,
    #[error("change has no number")]
    MissingChangeNumber,
    #[error("remote returned {status}: {body}")]
    Remote { status: u16, body: String },
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("core error: {0}")]
    Core(#[from] revmeta_core::CoreError),
}
