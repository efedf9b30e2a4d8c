use clap::Parser;
use tracing_subscriber::EnvFilter;

mod commands;
mod error;
mod output;
mod profile_store;

use commands::Commands;

#[derive(Parser)]
#[command(name = "revmeta", version, about = "Derive and edit code-review change metadata")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(err) = cli.command.run().await {
        eprintln!("{}", error::format_error(&err));
        std::process::exit(1);
    }
}
