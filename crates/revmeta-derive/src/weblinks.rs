use revmeta_core::types::{CommitInfo, ServerConfig, WebLink, GITILES_WEBLINK};

/// Supplies the candidate links for a commit. Implementations may synthesize
/// extra links (for example a repository browser derived from the sha).
pub trait WeblinkSource {
    fn weblinks(&self, commit_info: &CommitInfo) -> Vec<WebLink>;
}

/// The links the server attached to the commit, unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawWeblinks;

impl WeblinkSource for RawWeblinks {
    fn weblinks(&self, commit_info: &CommitInfo) -> Vec<WebLink> {
        commit_info.web_links.clone()
    }
}

/// Name of the link already surfaced elsewhere, and therefore hidden here.
pub fn primary_weblink_name(config: &ServerConfig) -> &str {
    config.primary_weblink_name().unwrap_or(GITILES_WEBLINK)
}

/// Links worth showing for `commit_info`, or `None` when the section should
/// be hidden.
pub fn filter_weblinks(
    commit_info: Option<&CommitInfo>,
    config: &ServerConfig,
) -> Option<Vec<WebLink>> {
    let commit_info = commit_info?;
    retain_secondary(commit_info.web_links.iter().cloned(), config)
}

/// Like [`filter_weblinks`] but over whatever `source` produces.
pub fn compute_weblinks(
    source: &dyn WeblinkSource,
    commit_info: Option<&CommitInfo>,
    config: &ServerConfig,
) -> Option<Vec<WebLink>> {
    let commit_info = commit_info?;
    retain_secondary(source.weblinks(commit_info), config)
}

fn retain_secondary(
    links: impl IntoIterator<Item = WebLink>,
    config: &ServerConfig,
) -> Option<Vec<WebLink>> {
    let primary = primary_weblink_name(config);
    let links: Vec<WebLink> = links.into_iter().filter(|l| l.name != primary).collect();
    if links.is_empty() {
        None
    } else {
        Some(links)
    }
}
