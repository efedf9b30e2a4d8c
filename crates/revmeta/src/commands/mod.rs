pub mod assignee;
pub mod hashtag;
pub mod profile;
pub mod show;
pub mod topic;

use std::sync::Arc;

use clap::Subcommand;

use revmeta_core::ChangeNumber;
use revmeta_sync::{HttpChangeRemote, MetadataSession};

use crate::profile_store::remote_for;

#[derive(Subcommand)]
pub enum Commands {
    /// Show derived metadata for a change
    Show(show::ShowArgs),
    /// Set or clear the assignee of a change
    Assignee(assignee::AssigneeArgs),
    /// Set or clear the topic of a change
    Topic(topic::TopicArgs),
    /// Add a hashtag to a change
    Hashtag(hashtag::HashtagArgs),
    /// Manage server profiles
    Profile(profile::ProfileArgs),
}

impl Commands {
    pub async fn run(self) -> anyhow::Result<()> {
        match self {
            Commands::Show(args) => show::run(args).await,
            Commands::Assignee(args) => assignee::run(args).await,
            Commands::Topic(args) => topic::run(args).await,
            Commands::Hashtag(args) => hashtag::run(args).await,
            Commands::Profile(args) => profile::run(args),
        }
    }
}

/// Open a session on change `number` using the named profile.
pub async fn open_session(
    profile: Option<&str>,
    number: u64,
) -> anyhow::Result<MetadataSession<HttpChangeRemote>> {
    let remote = Arc::new(remote_for(profile)?);
    let session = MetadataSession::load(remote, ChangeNumber::new(number)).await?;
    tracing::debug!(
        "loaded change {} with {} revisions",
        number,
        session.change().revisions.len()
    );
    Ok(session)
}
