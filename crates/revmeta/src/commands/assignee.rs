use clap::Args;

use revmeta_core::types::Account;
use revmeta_core::AccountId;
use revmeta_derive::mutability::assignee_read_only;

use crate::commands::open_session;

#[derive(Args)]
pub struct AssigneeArgs {
    /// Change number
    number: u64,
    /// Account id, email or username to assign
    #[arg(long, conflicts_with = "clear", required_unless_present = "clear")]
    account: Option<String>,
    /// Remove the current assignee
    #[arg(long)]
    clear: bool,
    /// Profile to use
    #[arg(long)]
    profile: Option<String>,
}

/// Interpret a command-line account reference.
pub fn parse_account(reference: &str) -> Account {
    if let Ok(id) = reference.parse::<AccountId>() {
        return Account {
            account_id: Some(id),
            ..Account::default()
        };
    }
    if reference.contains('@') {
        return Account::with_email(reference);
    }
    Account {
        username: Some(reference.to_string()),
        ..Account::default()
    }
}

pub async fn run(args: AssigneeArgs) -> anyhow::Result<()> {
    let mut session = open_session(args.profile.as_deref(), args.number).await?;
    if !session.config().assignee_enabled() {
        anyhow::bail!("the server has assignees disabled");
    }
    if assignee_read_only(true, session.change()) {
        anyhow::bail!("assignee of change {} is read-only", args.number);
    }

    let desired: Vec<Account> = args.account.as_deref().map(parse_account).into_iter().collect();
    let issued = session.edit_assignee(&desired).await?;
    if !issued {
        println!("Assignee unchanged");
        return Ok(());
    }
    match &session.change().assignee {
        Some(account) => println!("Assigned change {} to {}", args.number, account.display_name()),
        None => println!("Removed assignee from change {}", args.number),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_reference_forms() {
        assert_eq!(parse_account("1019328").account_id, Some(AccountId::new(1019328)));
        assert_eq!(parse_account("abc@def").email.as_deref(), Some("abc@def"));
        assert_eq!(parse_account("bojack").username.as_deref(), Some("bojack"));
    }
}
