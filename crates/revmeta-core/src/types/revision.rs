use serde::{Deserialize, Serialize};

use crate::types::{Account, WebLink};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Revision {
    #[serde(rename = "_number", default)]
    pub number: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploader: Option<Account>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit: Option<CommitInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub push_certificate: Option<PushCertificate>,
    #[serde(rename = "ref", default, skip_serializing_if = "Option::is_none")]
    pub git_ref: Option<String>,
}

impl Revision {
    /// `None` unless the commit carries a `parents` list, even an empty one.
    pub fn parents(&self) -> Option<&[ParentCommit]> {
        self.commit.as_ref().and_then(|c| c.parents.as_deref())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommitInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Account>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub committer: Option<Account>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parents: Option<Vec<ParentCommit>>,
    #[serde(default)]
    pub subject: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub web_links: Vec<WebLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentCommit {
    pub commit: String,
    #[serde(default)]
    pub subject: String,
}

impl ParentCommit {
    pub fn new(commit: &str, subject: &str) -> Self {
        Self {
            commit: commit.to_string(),
            subject: subject.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PushCertificate {
    #[serde(default)]
    pub certificate: String,
    #[serde(default)]
    pub key: GpgKeyInfo,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GpgKeyInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<KeyStatus>,
    #[serde(default)]
    pub problems: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KeyStatus {
    Bad,
    Ok,
    Trusted,
    #[serde(other)]
    Unknown,
}
