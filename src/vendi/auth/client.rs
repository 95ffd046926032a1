//! Client wrappers for the auth endpoints. The verification pair sits behind
//! a trait so the flow can be driven against a stubbed service in tests;
//! `ApiClient` is the production implementation.

use crate::vendi::api::ApiClient;
use crate::vendi::auth::types::{
    LoginRequest, LoginResponse, OtpResponse, ResendOtpRequest, VerifyOtpRequest,
};
use crate::vendi::error::Error;
use secrecy::SecretString;

/// Verification endpoints consumed by the flow.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    async fn verify_otp(&self, request: &VerifyOtpRequest) -> Result<OtpResponse, Error>;

    async fn resend_otp(&self, request: &ResendOtpRequest) -> Result<OtpResponse, Error>;
}

impl AuthApi for ApiClient {
    async fn verify_otp(&self, request: &VerifyOtpRequest) -> Result<OtpResponse, Error> {
        self.post_json("/v1/auth/verify-otp", request, None).await
    }

    async fn resend_otp(&self, request: &ResendOtpRequest) -> Result<OtpResponse, Error> {
        self.post_json("/v1/auth/resend-otp", request, None).await
    }
}

/// Sign in and return the session token.
/// The raw token is secret material; it is handed to the caller and never logged.
pub async fn login(client: &ApiClient, request: &LoginRequest) -> Result<SecretString, Error> {
    let response: LoginResponse = client.post_json("/v1/auth/login", request, None).await?;

    if !response.success {
        return Err(Error::Service(
            response
                .message
                .unwrap_or_else(|| "Sign-in failed.".to_string()),
        ));
    }

    response
        .token
        .map(SecretString::from)
        .ok_or_else(|| Error::Parse("Sign-in succeeded but no session token was returned".to_string()))
}
