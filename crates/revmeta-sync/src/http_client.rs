use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use revmeta_core::decode_json;
use revmeta_core::types::{Account, Change, ServerConfig};
use revmeta_core::ChangeNumber;

use crate::remote::{ChangeRemote, HashtagsInput};
use crate::SyncError;

/// Query options needed for every derivation to have its inputs.
const CHANGE_DETAIL_OPTIONS: &[&str] = &[
    "ALL_REVISIONS",
    "ALL_COMMITS",
    "WEB_LINKS",
    "PUSH_CERTIFICATES",
    "CHANGE_ACTIONS",
    "SUBMIT_REQUIREMENTS",
];

#[derive(Debug, Clone)]
pub enum Credentials {
    Basic { username: String, password: String },
    Bearer(String),
}

#[derive(Debug, Clone)]
pub struct HttpChangeRemote {
    base_url: String,
    credentials: Option<Credentials>,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct AssigneeInput {
    assignee: String,
}

#[derive(Serialize)]
struct TopicInput<'a> {
    topic: &'a str,
}

/// The string the server resolves an account from.
fn account_reference(account: &Account) -> Result<String, SyncError> {
    if let Some(id) = account.account_id {
        return Ok(id.to_string());
    }
    account
        .email
        .clone()
        .or_else(|| account.username.clone())
        .ok_or(SyncError::UnaddressableAccount)
}

impl HttpChangeRemote {
    pub fn new(base_url: String, credentials: Option<Credentials>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
            client: reqwest::Client::new(),
        }
    }

    /// Authenticated calls go through the `/a` prefix.
    fn endpoint(&self, suffix: &str) -> String {
        let prefix = if self.credentials.is_some() { "/a" } else { "" };
        format!("{}{}{}", self.base_url, prefix, suffix)
    }

    fn change_endpoint(&self, change: ChangeNumber, suffix: &str) -> String {
        self.endpoint(&format!("/changes/{change}{suffix}"))
    }

    fn request(&self, method: reqwest::Method, url: String) -> reqwest::RequestBuilder {
        let mut builder = self
            .client
            .request(method, url)
            .header(reqwest::header::ACCEPT, "application/json");

        match &self.credentials {
            Some(Credentials::Basic { username, password }) => {
                builder = builder.basic_auth(username, Some(password));
            }
            Some(Credentials::Bearer(token)) => {
                builder = builder.bearer_auth(token);
            }
            None => {}
        }

        builder
    }

    /// Send and decode. `204 No Content` comes back as `None`.
    async fn send<T: DeserializeOwned>(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> Result<Option<T>, SyncError> {
        let resp = builder.send().await?;
        let status = resp.status();
        if status == reqwest::StatusCode::NO_CONTENT {
            return Ok(None);
        }

        let body = resp.text().await?;
        if !status.is_success() {
            tracing::warn!("remote call failed with {}: {}", status, body.trim());
            return Err(SyncError::Remote {
                status: status.as_u16(),
                body: body.trim().to_string(),
            });
        }
        if body.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(decode_json(&body)?))
    }

    async fn send_required<T: DeserializeOwned>(
        &self,
        builder: reqwest::RequestBuilder,
        what: &str,
    ) -> Result<T, SyncError> {
        self.send(builder).await?.ok_or_else(|| SyncError::Remote {
            status: 204,
            body: format!("empty response for {what}"),
        })
    }
}

#[async_trait]
impl ChangeRemote for HttpChangeRemote {
    async fn get_change(&self, change: ChangeNumber) -> Result<Change, SyncError> {
        let query: Vec<(&str, &str)> = CHANGE_DETAIL_OPTIONS.iter().map(|o| ("o", *o)).collect();
        let url = self.change_endpoint(change, "/detail");
        tracing::debug!("fetching change {}", change);
        self.send_required(self.request(reqwest::Method::GET, url).query(&query), "change")
            .await
    }

    async fn get_server_config(&self) -> Result<ServerConfig, SyncError> {
        let url = self.endpoint("/config/server/info");
        self.send_required(self.request(reqwest::Method::GET, url), "server info")
            .await
    }

    async fn get_assignee(&self, change: ChangeNumber) -> Result<Option<Account>, SyncError> {
        let url = self.change_endpoint(change, "/assignee");
        self.send(self.request(reqwest::Method::GET, url)).await
    }

    async fn set_assignee(
        &self,
        change: ChangeNumber,
        assignee: &Account,
    ) -> Result<Account, SyncError> {
        let input = AssigneeInput {
            assignee: account_reference(assignee)?,
        };
        let url = self.change_endpoint(change, "/assignee");
        tracing::debug!("setting assignee of {} to {}", change, input.assignee);
        let stored: Option<Account> = self
            .send(self.request(reqwest::Method::PUT, url).json(&input))
            .await?;
        Ok(stored.unwrap_or_else(|| assignee.clone()))
    }

    async fn delete_assignee(&self, change: ChangeNumber) -> Result<(), SyncError> {
        let url = self.change_endpoint(change, "/assignee");
        tracing::debug!("deleting assignee of {}", change);
        let _: Option<Account> = self.send(self.request(reqwest::Method::DELETE, url)).await?;
        Ok(())
    }

    async fn set_topic(
        &self,
        change: ChangeNumber,
        topic: Option<&str>,
    ) -> Result<String, SyncError> {
        let url = self.change_endpoint(change, "/topic");
        let builder = match topic.filter(|t| !t.is_empty()) {
            Some(topic) => self
                .request(reqwest::Method::PUT, url)
                .json(&TopicInput { topic }),
            None => self.request(reqwest::Method::DELETE, url),
        };
        tracing::debug!("setting topic of {} to {:?}", change, topic);
        let stored: Option<String> = self.send(builder).await?;
        Ok(stored.unwrap_or_default())
    }

    async fn set_hashtags(
        &self,
        change: ChangeNumber,
        input: &HashtagsInput,
    ) -> Result<Vec<String>, SyncError> {
        let url = self.change_endpoint(change, "/hashtags");
        tracing::debug!("editing hashtags of {}: {:?}", change, input);
        let stored: Option<Vec<String>> = self
            .send(self.request(reqwest::Method::POST, url).json(input))
            .await?;
        Ok(stored.unwrap_or_default())
    }
}
