use revmeta_core::types::{Account, Change};

/// Class applied to a role row that has nothing to show.
pub const HIDE_DISPLAY_CLASS: &str = "hideDisplay";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeRole {
    Uploader,
    Author,
    Committer,
}

impl ChangeRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeRole::Uploader => "uploader",
            ChangeRole::Author => "author",
            ChangeRole::Committer => "committer",
        }
    }
}

/// The account that played `role` on the current revision, unless it is the
/// change owner.
pub fn non_owner_role(change: &Change, role: ChangeRole) -> Option<&Account> {
    let rev = change.current_revision()?;
    let candidate = match role {
        ChangeRole::Uploader => rev.uploader.as_ref(),
        ChangeRole::Author => rev.commit.as_ref().and_then(|c| c.author.as_ref()),
        ChangeRole::Committer => rev.commit.as_ref().and_then(|c| c.committer.as_ref()),
    }?;
    if candidate.same_identity(&change.owner) {
        return None;
    }
    Some(candidate)
}

pub fn show_role_class(change: &Change, role: ChangeRole) -> &'static str {
    if non_owner_role(change, role).is_some() {
        ""
    } else {
        HIDE_DISPLAY_CLASS
    }
}
