use clap::Args;

use revmeta_derive::mutability::hashtag_read_only;

use crate::commands::open_session;

#[derive(Args)]
pub struct HashtagArgs {
    /// Change number
    number: u64,
    /// Hashtag to add
    tag: String,
    /// Remove the hashtag instead of adding it
    #[arg(long)]
    remove: bool,
    /// Profile to use
    #[arg(long)]
    profile: Option<String>,
}

pub async fn run(args: HashtagArgs) -> anyhow::Result<()> {
    let tag = args.tag.trim();
    if tag.is_empty() {
        anyhow::bail!("hashtag must not be empty");
    }
    let mut session = open_session(args.profile.as_deref(), args.number).await?;
    if hashtag_read_only(true, session.change()) {
        anyhow::bail!("hashtags of change {} are read-only", args.number);
    }

    let tags = if args.remove {
        session.remove_hashtag(tag).await?
    } else {
        session.add_hashtag(tag).await?
    };
    println!("Hashtags of change {}: {}", args.number, tags.join(", "));
    Ok(())
}
