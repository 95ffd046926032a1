//! Register the vendor payout account.

use crate::cli::actions::Action;
use crate::vendi::api::ApiClient;
use crate::vendi::vendor::{setup_payout, PayoutSetupRequest};
use anyhow::{anyhow, Result};

/// Handle the payout action
pub async fn handle(action: Action) -> Result<()> {
    let Action::Payout {
        globals,
        provider,
        account_number,
        account_name,
    } = action
    else {
        return Err(anyhow!("unexpected action"));
    };

    let client = ApiClient::new(&globals.api_url)?;
    let request = PayoutSetupRequest {
        provider,
        account_number,
        account_name,
    };

    let response = setup_payout(&client, &globals.session_token, &request).await?;

    match response.message {
        Some(message) => println!("{message}"),
        None => println!("Payout account saved."),
    }

    Ok(())
}
