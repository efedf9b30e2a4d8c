use serde::{Deserialize, Serialize};

use crate::id::AccountId;

/// An account or a bare git identity. Commit authors and committers usually
/// carry only `name` and `email`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    #[serde(
        rename = "_account_id",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub account_id: Option<AccountId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl Account {
    pub fn with_id(id: u64) -> Self {
        Self {
            account_id: Some(AccountId::new(id)),
            ..Self::default()
        }
    }

    pub fn with_email(email: &str) -> Self {
        Self {
            email: Some(email.to_string()),
            ..Self::default()
        }
    }

    /// Numeric ids decide when both sides have one; otherwise the emails
    /// must match, two missing emails included.
    pub fn same_identity(&self, other: &Account) -> bool {
        match (self.account_id, other.account_id) {
            (Some(a), Some(b)) => a == b,
            _ => self.email == other.email,
        }
    }

    /// Best human-readable label: name, then email, then account id.
    pub fn display_name(&self) -> String {
        if let Some(name) = &self.name {
            return name.clone();
        }
        if let Some(email) = &self.email {
            return email.clone();
        }
        match self.account_id {
            Some(id) => format!("account {id}"),
            None => "anonymous".to_string(),
        }
    }
}
