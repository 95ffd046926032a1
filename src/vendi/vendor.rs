//! Vendor payout account setup client.

use crate::vendi::api::ApiClient;
use crate::vendi::error::Error;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PayoutSetupRequest {
    pub provider: String,
    pub account_number: String,
    pub account_name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PayoutSetupResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Register the payout account for the signed-in vendor.
///
/// # Errors
/// `Error::Service` when the service rejects the account, otherwise the
/// mapped network or HTTP failure.
pub async fn setup_payout(
    client: &ApiClient,
    session_token: &SecretString,
    request: &PayoutSetupRequest,
) -> Result<PayoutSetupResponse, Error> {
    let response: PayoutSetupResponse = client
        .post_json("/v1/vendor/payout-account", request, Some(session_token))
        .await?;

    if !response.success {
        return Err(Error::Service(
            response
                .message
                .unwrap_or_else(|| "Payout setup failed.".to_string()),
        ));
    }

    Ok(response)
}
