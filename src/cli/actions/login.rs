//! Sign in and print the session token for the authenticated subcommands.

use crate::cli::actions::Action;
use crate::vendi::api::ApiClient;
use crate::vendi::auth::client::login;
use crate::vendi::auth::types::LoginRequest;
use crate::vendi::auth::utils::{normalize_email, valid_email};
use anyhow::{anyhow, Result};
use secrecy::ExposeSecret;

/// Handle the login action
pub async fn handle(action: Action) -> Result<()> {
    let Action::Login {
        globals,
        email,
        password,
    } = action
    else {
        return Err(anyhow!("unexpected action"));
    };

    let email = normalize_email(&email);
    if !valid_email(&email) {
        return Err(anyhow!("Email address looks invalid."));
    }

    let client = ApiClient::new(&globals.api_url)?;
    let request = LoginRequest {
        email,
        password: password.expose_secret().to_string(),
    };

    let token = login(&client, &request).await?;

    println!("Signed in. Export the session token for the other subcommands:");
    println!("export VENDI_SESSION_TOKEN={}", token.expose_secret());

    Ok(())
}
