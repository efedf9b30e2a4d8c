use clap::{Args, Subcommand};

use crate::profile_store::{load_profiles, save_profiles, Profile, DEFAULT_PROFILE};

#[derive(Args)]
pub struct ProfileArgs {
    #[command(subcommand)]
    command: ProfileCommand,
}

#[derive(Subcommand)]
enum ProfileCommand {
    /// Create or replace a profile
    Set {
        /// Base URL of the review server
        base_url: String,
        #[arg(long, default_value = DEFAULT_PROFILE)]
        profile: String,
        /// Username for HTTP basic auth
        #[arg(long)]
        username: Option<String>,
        /// HTTP password for basic auth
        #[arg(long, requires = "username")]
        http_password: Option<String>,
        /// Bearer token (takes precedence over basic auth)
        #[arg(long)]
        token: Option<String>,
    },
    /// Show a profile without secrets
    Show {
        #[arg(long, default_value = DEFAULT_PROFILE)]
        profile: String,
    },
    /// List configured profiles
    List,
}

pub fn run(args: ProfileArgs) -> anyhow::Result<()> {
    match args.command {
        ProfileCommand::Set {
            base_url,
            profile,
            username,
            http_password,
            token,
        } => {
            let mut config = load_profiles()?;
            config.profiles.insert(
                profile.clone(),
                Profile {
                    base_url,
                    username,
                    http_password,
                    token,
                },
            );
            save_profiles(&config)?;
            println!("Saved profile '{profile}'");
            Ok(())
        }
        ProfileCommand::Show { profile } => {
            let config = load_profiles()?;
            let p = config
                .profiles
                .get(&profile)
                .ok_or_else(|| anyhow::anyhow!("profile '{profile}' not found"))?;
            println!("Profile:  {profile}");
            println!("Base URL: {}", p.base_url);
            if let Some(username) = &p.username {
                println!("Username: {username}");
            }
            let auth = if p.token.is_some() {
                "bearer token"
            } else if p.http_password.is_some() {
                "http password"
            } else {
                "anonymous"
            };
            println!("Auth:     {auth}");
            Ok(())
        }
        ProfileCommand::List => {
            let config = load_profiles()?;
            if config.profiles.is_empty() {
                println!("No profiles configured");
                return Ok(());
            }
            for (name, p) in &config.profiles {
                println!("{name}\t{}", p.base_url);
            }
            Ok(())
        }
    }
}
