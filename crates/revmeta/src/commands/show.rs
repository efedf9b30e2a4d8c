use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use revmeta_core::decode_json;
use revmeta_core::types::{Change, ServerConfig};
use revmeta_derive::{ChangeMetadata, DeriveOptions};

use crate::commands::open_session;
use crate::output::render_metadata;

#[derive(Args)]
pub struct ShowArgs {
    /// Change snapshot (REST JSON, with or without the `)]}'` prefix)
    #[arg(required_unless_present = "remote")]
    snapshot: Option<PathBuf>,
    /// Server info document to derive against
    #[arg(long)]
    config: Option<PathBuf>,
    /// Fetch change NUMBER from the profile's server instead of a file
    #[arg(long, value_name = "NUMBER", conflicts_with_all = ["snapshot", "config"])]
    remote: Option<u64>,
    /// Profile to use with --remote
    #[arg(long)]
    profile: Option<String>,
    /// Treat the viewer as able to edit the change
    #[arg(long)]
    mutable: bool,
    /// Mark the parent list as current
    #[arg(long)]
    parent_is_current: bool,
    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

fn read_json<T: serde::de::DeserializeOwned>(path: &PathBuf) -> anyhow::Result<T> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    decode_json(&content).with_context(|| format!("parsing {}", path.display()))
}

pub async fn run(args: ShowArgs) -> anyhow::Result<()> {
    let (change, config): (Change, ServerConfig) = match (args.remote, &args.snapshot) {
        (Some(number), _) => {
            let session = open_session(args.profile.as_deref(), number).await?;
            (session.change().clone(), session.config().clone())
        }
        (None, Some(path)) => {
            let change = read_json(path)?;
            let config = match &args.config {
                Some(path) => read_json(path)?,
                None => ServerConfig::default(),
            };
            (change, config)
        }
        (None, None) => anyhow::bail!("either a snapshot file or --remote is required"),
    };

    let options = DeriveOptions {
        mutable: args.mutable,
        parent_is_current: args.parent_is_current,
        setting_topic: false,
    };
    let meta = ChangeMetadata::derive(&change, &config, options);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&meta)?);
    } else {
        println!("{}", render_metadata(&change, &meta));
    }
    Ok(())
}
