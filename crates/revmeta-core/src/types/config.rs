use serde::{Deserialize, Serialize};

/// Subset of the server info document that the derivations read.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receive: Option<ReceiveInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gerrit: Option<GerritInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change: Option<ChangeConfigInfo>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReceiveInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_signed_push: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GerritInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_weblink_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChangeConfigInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_assignee: Option<bool>,
}

impl ServerConfig {
    pub fn signed_push_enabled(&self) -> bool {
        self.receive
            .as_ref()
            .and_then(|r| r.enable_signed_push)
            .unwrap_or(false)
    }

    pub fn primary_weblink_name(&self) -> Option<&str> {
        self.gerrit
            .as_ref()
            .and_then(|g| g.primary_weblink_name.as_deref())
    }

    pub fn assignee_enabled(&self) -> bool {
        self.change
            .as_ref()
            .and_then(|c| c.enable_assignee)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_disables_everything() {
        let config: ServerConfig = serde_json::from_str("{}").unwrap();
        assert!(!config.signed_push_enabled());
        assert!(!config.assignee_enabled());
        assert_eq!(config.primary_weblink_name(), None);
    }

    #[test]
    fn reads_nested_sections() {
        let config: ServerConfig = serde_json::from_str(
            r#"{
                "receive": {"enable_signed_push": true},
                "gerrit": {"primary_weblink_name": "browser"},
                "change": {"enable_assignee": true}
            }"#,
        )
        .unwrap();
        assert!(config.signed_push_enabled());
        assert!(config.assignee_enabled());
        assert_eq!(config.primary_weblink_name(), Some("browser"));
    }
}
