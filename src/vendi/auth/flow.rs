//! Email verification flow: composes the OTP input manager, the resend
//! throttle, and the submitter. The submit and resend machines are
//! deliberately independent; neither path inspects or blocks the other.

use crate::vendi::auth::client::AuthApi;
use crate::vendi::auth::countdown::ResendCountdown;
use crate::vendi::auth::otp::{OtpInput, OTP_LEN};
use crate::vendi::auth::types::{OtpResponse, ResendOtpRequest, VerifyOtpRequest};
use crate::vendi::auth::utils::{normalize_email, valid_email};
use crate::vendi::error::Error;
use tracing::debug;

const INCOMPLETE_CODE_MESSAGE: &str = "Enter the 6-digit code sent to your email.";
const VERIFY_FALLBACK_MESSAGE: &str = "Verification failed. Please try again.";
const RESEND_FALLBACK_MESSAGE: &str = "Could not resend the code. Please try again.";

/// Where the caller navigates after a successful verification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerifiedNext {
    VendorSetup,
    Login,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Submitting,
    Verified,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResendState {
    Idle,
    Resending,
}

#[derive(Debug)]
pub struct VerifyFlow {
    email: String,
    next: VerifiedNext,
    input: OtpInput,
    countdown: ResendCountdown,
    submit_state: SubmitState,
    resend_state: ResendState,
}

impl VerifyFlow {
    /// Create a flow for the given account email.
    ///
    /// # Errors
    /// Returns `Error::Validation` if the email does not look like one.
    pub fn new(email: &str, next: VerifiedNext) -> Result<Self, Error> {
        let email = normalize_email(email);
        if !valid_email(&email) {
            return Err(Error::Validation("Email address looks invalid.".to_string()));
        }

        Ok(Self {
            email,
            next,
            input: OtpInput::new(),
            countdown: ResendCountdown::new(),
            submit_state: SubmitState::Idle,
            resend_state: ResendState::Idle,
        })
    }

    pub fn on_digit_changed(&mut self, index: usize, raw: &str) {
        self.input.on_digit_changed(index, raw);
    }

    pub fn on_backspace(&mut self, index: usize) {
        self.input.on_backspace(index);
    }

    /// Advance the resend countdown by one second.
    ///
    /// Returns true on the tick that unlocks the resend action.
    pub fn tick(&mut self) -> bool {
        self.countdown.tick()
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.input.is_complete() && self.submit_state != SubmitState::Submitting
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn input(&self) -> &OtpInput {
        &self.input
    }

    #[must_use]
    pub fn countdown(&self) -> &ResendCountdown {
        &self.countdown
    }

    #[must_use]
    pub fn submit_state(&self) -> &SubmitState {
        &self.submit_state
    }

    #[must_use]
    pub fn resend_state(&self) -> &ResendState {
        &self.resend_state
    }

    /// Submit the assembled code for verification.
    ///
    /// Fails fast with `Error::Validation` before any network call unless the
    /// code is exactly six digits. Success leaves the cells alone and returns
    /// where the caller should navigate next; any failure clears the cells,
    /// returns focus to cell 0, and surfaces a message. Nothing is retried.
    ///
    /// # Errors
    /// `Error::Validation` for an incomplete code, otherwise the mapped
    /// network, HTTP, or service failure.
    pub async fn submit<A: AuthApi>(&mut self, api: &A) -> Result<VerifiedNext, Error> {
        let otp = self.input.code();
        if otp.len() != OTP_LEN || !otp.chars().all(|c| c.is_ascii_digit()) {
            return Err(Error::Validation(INCOMPLETE_CODE_MESSAGE.to_string()));
        }

        self.submit_state = SubmitState::Submitting;

        let request = VerifyOtpRequest {
            email: self.email.clone(),
            otp,
        };

        match api.verify_otp(&request).await {
            Ok(OtpResponse { success: true, .. }) => {
                debug!("email verified for {}", self.email);
                self.submit_state = SubmitState::Verified;
                Ok(self.next)
            }
            Ok(OtpResponse { message, .. }) => {
                self.fail_submit();
                Err(Error::Service(
                    message.unwrap_or_else(|| VERIFY_FALLBACK_MESSAGE.to_string()),
                ))
            }
            Err(err) => {
                self.fail_submit();
                Err(err)
            }
        }
    }

    /// Request a fresh code.
    ///
    /// A no-op unless the cooldown has elapsed and no resend is in flight. On
    /// success the countdown restarts and the cells are cleared with focus on
    /// cell 0; on failure the cooldown is left alone so the user may retry.
    ///
    /// # Errors
    /// The mapped network, HTTP, or service failure.
    pub async fn trigger_resend<A: AuthApi>(&mut self, api: &A) -> Result<(), Error> {
        if !self.countdown.resend_allowed() || self.resend_state == ResendState::Resending {
            return Ok(());
        }

        self.resend_state = ResendState::Resending;

        let request = ResendOtpRequest {
            email: self.email.clone(),
        };

        let result = api.resend_otp(&request).await;
        self.resend_state = ResendState::Idle;

        match result {
            Ok(OtpResponse { success: true, .. }) => {
                debug!("new code requested for {}", self.email);
                self.countdown.reset();
                self.input.clear();
                Ok(())
            }
            Ok(OtpResponse { message, .. }) => Err(Error::Service(
                message.unwrap_or_else(|| RESEND_FALLBACK_MESSAGE.to_string()),
            )),
            Err(err) => Err(err),
        }
    }

    fn fail_submit(&mut self) {
        self.submit_state = SubmitState::Idle;
        self.input.clear();
    }
}
