use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::id::{ChangeNumber, RevisionId};
use crate::types::{Account, CommitInfo, Label, Revision};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChangeStatus {
    #[default]
    New,
    Merged,
    Abandoned,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubmitType {
    MergeIfNecessary,
    FastForwardOnly,
    RebaseIfNecessary,
    RebaseAlways,
    MergeAlways,
    CherryPick,
    Inherit,
}

impl SubmitType {
    pub fn display_name(&self) -> &'static str {
        match self {
            SubmitType::MergeIfNecessary => "Merge if Necessary",
            SubmitType::FastForwardOnly => "Fast Forward Only",
            SubmitType::RebaseIfNecessary => "Rebase if Necessary",
            SubmitType::RebaseAlways => "Rebase Always",
            SubmitType::MergeAlways => "Merge Always",
            SubmitType::CherryPick => "Cherry Pick",
            SubmitType::Inherit => "Inherit",
        }
    }
}

/// Capability advertised by the server for one action on a change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActionInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
}

impl ActionInfo {
    pub fn enabled() -> Self {
        Self {
            enabled: Some(true),
            ..Self::default()
        }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: Some(false),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubmitRequirement {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub fallback_text: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Change {
    #[serde(rename = "_number", default, skip_serializing_if = "Option::is_none")]
    pub number: Option<ChangeNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(default)]
    pub status: ChangeStatus,
    #[serde(default)]
    pub owner: Account,
    #[serde(default)]
    pub revisions: BTreeMap<RevisionId, Revision>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_revision: Option<RevisionId>,
    #[serde(default)]
    pub labels: BTreeMap<String, Label>,
    #[serde(default)]
    pub actions: BTreeMap<String, ActionInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hashtags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<Account>,
    #[serde(default)]
    pub work_in_progress: bool,
    #[serde(default)]
    pub mergeable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submit_type: Option<SubmitType>,
    #[serde(default)]
    pub requirements: Vec<SubmitRequirement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cherry_pick_of_change: Option<ChangeNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cherry_pick_of_patch_set: Option<u32>,
}

impl Change {
    /// The revision `current_revision` points at, if it exists.
    pub fn current_revision(&self) -> Option<&Revision> {
        self.current_revision
            .as_ref()
            .and_then(|id| self.revisions.get(id))
    }

    pub fn current_commit(&self) -> Option<&CommitInfo> {
        self.current_revision().and_then(|rev| rev.commit.as_ref())
    }

    /// Missing actions count as disabled.
    pub fn action_enabled(&self, name: &str) -> bool {
        self.actions
            .get(name)
            .and_then(|a| a.enabled)
            .unwrap_or(false)
    }

    pub fn is_open(&self) -> bool {
        self.status == ChangeStatus::New
    }
}
