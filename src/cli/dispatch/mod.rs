//! Command-line argument dispatch.
//!
//! Maps validated CLI matches to the action the binary should run. Session
//! material lands in `GlobalArgs` so handlers never touch raw strings.

use crate::cli::{actions::Action, globals::GlobalArgs};
use anyhow::{Context, Result};
use secrecy::SecretString;

/// Map validated CLI matches to an action.
///
/// # Errors
/// Returns an error if required arguments are missing or inconsistent.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let api_url = matches
        .get_one::<String>("api-url")
        .cloned()
        .context("missing required argument: --api-url")?;

    let globals = GlobalArgs::new(api_url);

    match matches.subcommand() {
        Some(("verify", sub)) => Ok(Action::Verify {
            globals,
            email: required(sub, "email")?,
            to_login: sub.get_flag("login"),
        }),
        Some(("login", sub)) => Ok(Action::Login {
            globals,
            email: required(sub, "email")?,
            password: SecretString::from(required(sub, "password")?),
        }),
        Some(("rewards", sub)) => Ok(Action::Rewards {
            globals: with_session_token(globals, sub)?,
        }),
        Some(("payout", sub)) => Ok(Action::Payout {
            globals: with_session_token(globals, sub)?,
            provider: required(sub, "provider")?,
            account_number: required(sub, "account-number")?,
            account_name: required(sub, "account-name")?,
        }),
        _ => Err(anyhow::anyhow!("missing subcommand")),
    }
}

fn required(matches: &clap::ArgMatches, name: &str) -> Result<String> {
    matches
        .get_one::<String>(name)
        .cloned()
        .with_context(|| format!("missing required argument: --{name}"))
}

fn with_session_token(mut globals: GlobalArgs, matches: &clap::ArgMatches) -> Result<GlobalArgs> {
    let token = required(matches, "session-token")?;
    globals.set_session_token(SecretString::from(token));
    Ok(globals)
}
