use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use revmeta_sync::{Credentials, HttpChangeRemote};

pub const DEFAULT_PROFILE: &str = "default";

#[derive(serde::Serialize, serde::Deserialize, Default, Clone)]
pub struct ProfileConfig {
    #[serde(default)]
    pub profiles: BTreeMap<String, Profile>,
}

#[derive(serde::Serialize, serde::Deserialize, Default, Clone, Debug, PartialEq)]
pub struct Profile {
    pub base_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl Profile {
    /// A bearer token wins over a username/password pair.
    pub fn credentials(&self) -> Option<Credentials> {
        if let Some(token) = &self.token {
            return Some(Credentials::Bearer(token.clone()));
        }
        match (&self.username, &self.http_password) {
            (Some(username), Some(password)) => Some(Credentials::Basic {
                username: username.clone(),
                password: password.clone(),
            }),
            _ => None,
        }
    }
}

fn home_dir() -> anyhow::Result<PathBuf> {
    dirs::home_dir().ok_or_else(|| anyhow::anyhow!("could not find home directory"))
}

pub fn profile_config_path() -> anyhow::Result<PathBuf> {
    Ok(home_dir()?.join(".revmeta").join("profiles.toml"))
}

pub fn load_profiles_from(path: &Path) -> anyhow::Result<ProfileConfig> {
    if !path.exists() {
        return Ok(ProfileConfig::default());
    }
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

pub fn save_profiles_to(path: &Path, config: &ProfileConfig) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_profiles() -> anyhow::Result<ProfileConfig> {
    load_profiles_from(&profile_config_path()?)
}

pub fn save_profiles(config: &ProfileConfig) -> anyhow::Result<()> {
    save_profiles_to(&profile_config_path()?, config)
}

pub fn resolve_profile(name: Option<&str>) -> anyhow::Result<Profile> {
    let name = name.unwrap_or(DEFAULT_PROFILE);
    let config = load_profiles()?;
    config.profiles.get(name).cloned().ok_or_else(|| {
        anyhow::anyhow!("no profile named '{name}' (use `revmeta profile set` first)")
    })
}

pub fn remote_for(name: Option<&str>) -> anyhow::Result<HttpChangeRemote> {
    let profile = resolve_profile(name)?;
    Ok(HttpChangeRemote::new(
        profile.base_url.clone(),
        profile.credentials(),
    ))
}
