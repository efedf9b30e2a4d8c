use async_trait::async_trait;
use serde::Serialize;

use revmeta_core::types::{Account, Change, ServerConfig};
use revmeta_core::ChangeNumber;

use crate::SyncError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HashtagsInput {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub add: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub remove: Vec<String>,
}

impl HashtagsInput {
    pub fn add(tag: &str) -> Self {
        Self {
            add: vec![tag.to_string()],
            remove: Vec::new(),
        }
    }

    pub fn remove(tag: &str) -> Self {
        Self {
            add: Vec::new(),
            remove: vec![tag.to_string()],
        }
    }
}

/// Remote review service holding the authoritative change state.
#[async_trait]
pub trait ChangeRemote: Send + Sync {
    async fn get_change(&self, change: ChangeNumber) -> Result<Change, SyncError>;

    async fn get_server_config(&self) -> Result<ServerConfig, SyncError>;

    async fn get_assignee(&self, change: ChangeNumber) -> Result<Option<Account>, SyncError>;

    async fn set_assignee(
        &self,
        change: ChangeNumber,
        assignee: &Account,
    ) -> Result<Account, SyncError>;

    async fn delete_assignee(&self, change: ChangeNumber) -> Result<(), SyncError>;

    /// Returns the topic the server stored; empty when removed.
    async fn set_topic(&self, change: ChangeNumber, topic: Option<&str>)
        -> Result<String, SyncError>;

    /// Returns the full hashtag list after the edit.
    async fn set_hashtags(
        &self,
        change: ChangeNumber,
        input: &HashtagsInput,
    ) -> Result<Vec<String>, SyncError>;
}
