use serde::{Deserialize, Serialize};

/// Name of the repository browser link that is primary unless the server
/// configures another one.
pub const GITILES_WEBLINK: &str = "gitiles";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebLink {
    pub name: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl WebLink {
    pub fn new(name: &str, url: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
            image_url: None,
        }
    }
}
