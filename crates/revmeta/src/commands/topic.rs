use clap::Args;

use revmeta_derive::mutability::topic_read_only;

use crate::commands::open_session;

#[derive(Args)]
pub struct TopicArgs {
    /// Change number
    number: u64,
    /// New topic
    #[arg(conflicts_with = "clear", required_unless_present = "clear")]
    topic: Option<String>,
    /// Remove the topic
    #[arg(long)]
    clear: bool,
    /// Profile to use
    #[arg(long)]
    profile: Option<String>,
}

pub async fn run(args: TopicArgs) -> anyhow::Result<()> {
    let mut session = open_session(args.profile.as_deref(), args.number).await?;
    if topic_read_only(true, session.change()) {
        anyhow::bail!("topic of change {} is read-only", args.number);
    }

    let stored = session.set_topic(args.topic.as_deref()).await?;
    if stored.is_empty() {
        println!("Removed topic from change {}", args.number);
    } else {
        println!("Topic of change {} is now '{stored}'", args.number);
    }
    Ok(())
}
