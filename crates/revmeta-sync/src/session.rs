use std::sync::Arc;

use tokio::sync::broadcast;

use revmeta_core::types::{Account, Change, ServerConfig};
use revmeta_core::ChangeNumber;
use revmeta_derive::summary::{ChangeMetadata, DeriveOptions};

use crate::assignee::{self, AssigneeSync};
use crate::remote::{ChangeRemote, HashtagsInput};
use crate::SyncError;

const EVENT_CAPACITY: usize = 64;

/// Notification emitted after the server confirmed an edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataEvent {
    AssigneeChanged(Option<Account>),
    TopicChanged(String),
    HashtagsChanged(Vec<String>),
}

/// One change being viewed and edited against a remote service.
pub struct MetadataSession<R: ChangeRemote> {
    remote: Arc<R>,
    change: Change,
    config: ServerConfig,
    assignee: AssigneeSync,
    events: broadcast::Sender<MetadataEvent>,
}

impl<R: ChangeRemote> MetadataSession<R> {
    pub fn new(remote: Arc<R>, change: Change, config: ServerConfig) -> Self {
        let mut assignee = AssigneeSync::new(config.assignee_enabled());
        assignee.change_changed(&change);
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            remote,
            change,
            config,
            assignee,
            events,
        }
    }

    /// Fetch server config and the change, in that order.
    pub async fn load(remote: Arc<R>, number: ChangeNumber) -> Result<Self, SyncError> {
        let config = remote.get_server_config().await?;
        let change = remote.get_change(number).await?;
        Ok(Self::new(remote, change, config))
    }

    pub fn change(&self) -> &Change {
        &self.change
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn assignee_view(&self) -> &[Account] {
        self.assignee.view()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<MetadataEvent> {
        self.events.subscribe()
    }

    pub fn replace_change(&mut self, change: Change) {
        self.assignee.change_changed(&change);
        self.change = change;
    }

    pub fn metadata(&self, options: DeriveOptions) -> ChangeMetadata {
        ChangeMetadata::derive(&self.change, &self.config, options)
    }

    fn number(&self) -> Result<ChangeNumber, SyncError> {
        self.change.number.ok_or(SyncError::MissingChangeNumber)
    }

    fn emit(&self, event: MetadataEvent) {
        // No subscribers is fine.
        let _ = self.events.send(event);
    }

    /// Returns whether a remote call was made.
    pub async fn edit_assignee(&mut self, desired: &[Account]) -> Result<bool, SyncError> {
        let Some(call) = self.assignee.begin(&self.change, desired)? else {
            return Ok(false);
        };
        let outcome = assignee::issue(self.remote.as_ref(), &call).await;
        self.assignee.complete(&call, outcome, &mut self.change)?;
        self.emit(MetadataEvent::AssigneeChanged(self.change.assignee.clone()));
        Ok(true)
    }

    /// `None` removes the topic; the change then carries an empty topic.
    pub async fn set_topic(&mut self, topic: Option<&str>) -> Result<String, SyncError> {
        let number = self.number()?;
        let stored = self.remote.set_topic(number, topic).await?;
        tracing::debug!("topic of {} is now {:?}", number, stored);
        self.change.topic = Some(stored.clone());
        self.emit(MetadataEvent::TopicChanged(stored.clone()));
        Ok(stored)
    }

    pub async fn add_hashtag(&mut self, tag: &str) -> Result<Vec<String>, SyncError> {
        self.edit_hashtags(HashtagsInput::add(tag)).await
    }

    pub async fn remove_hashtag(&mut self, tag: &str) -> Result<Vec<String>, SyncError> {
        self.edit_hashtags(HashtagsInput::remove(tag)).await
    }

    /// The server's resulting list replaces the local one.
    async fn edit_hashtags(&mut self, input: HashtagsInput) -> Result<Vec<String>, SyncError> {
        let number = self.number()?;
        let stored = self.remote.set_hashtags(number, &input).await?;
        self.change.hashtags = Some(stored.clone());
        self.emit(MetadataEvent::HashtagsChanged(stored.clone()));
        Ok(stored)
    }
}
