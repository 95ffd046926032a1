//! End-to-end exercise of the verification flow through the public API, the
//! way a mobile shell would drive it: wrong code first, wait out the
//! cooldown, request a fresh code, then verify.

use std::cell::RefCell;
use std::collections::VecDeque;

use vendi::vendi::auth::client::AuthApi;
use vendi::vendi::auth::flow::{SubmitState, VerifiedNext, VerifyFlow};
use vendi::vendi::auth::types::{OtpResponse, ResendOtpRequest, VerifyOtpRequest};
use vendi::vendi::error::Error;

#[derive(Default)]
struct ScriptedApi {
    verify_results: RefCell<VecDeque<Result<OtpResponse, Error>>>,
    resend_results: RefCell<VecDeque<Result<OtpResponse, Error>>>,
}

impl AuthApi for ScriptedApi {
    async fn verify_otp(&self, _request: &VerifyOtpRequest) -> Result<OtpResponse, Error> {
        self.verify_results
            .borrow_mut()
            .pop_front()
            .expect("unexpected verify call")
    }

    async fn resend_otp(&self, _request: &ResendOtpRequest) -> Result<OtpResponse, Error> {
        self.resend_results
            .borrow_mut()
            .pop_front()
            .expect("unexpected resend call")
    }
}

fn enter_code(flow: &mut VerifyFlow, code: &str) {
    for (index, digit) in code.chars().enumerate() {
        flow.on_digit_changed(index, &digit.to_string());
    }
}

#[tokio::test]
async fn full_session_with_resend() {
    let api = ScriptedApi::default();
    api.verify_results.borrow_mut().push_back(Ok(OtpResponse {
        success: false,
        message: Some("Code expired".to_string()),
    }));
    api.verify_results.borrow_mut().push_back(Ok(OtpResponse {
        success: true,
        message: None,
    }));
    api.resend_results.borrow_mut().push_back(Ok(OtpResponse {
        success: true,
        message: None,
    }));

    let mut flow = VerifyFlow::new("alice@example.com", VerifiedNext::Login).expect("flow");

    // First attempt fails and wipes the typed code
    enter_code(&mut flow, "111111");
    let err = flow.submit(&api).await.unwrap_err();
    assert_eq!(err.to_string(), "Code expired");
    assert_eq!(flow.input().code(), "");
    assert_eq!(flow.input().focus(), 0);

    // Resend stays locked until the cooldown runs out
    flow.trigger_resend(&api).await.expect("noop while locked");
    for _ in 0..30 {
        flow.tick();
    }
    assert!(flow.countdown().resend_allowed());

    flow.trigger_resend(&api).await.expect("resent");
    assert_eq!(flow.countdown().remaining(), 30);

    // Second attempt verifies and leaves the cells for navigation to handle
    enter_code(&mut flow, "222222");
    let next = flow.submit(&api).await.expect("verified");
    assert_eq!(next, VerifiedNext::Login);
    assert_eq!(flow.submit_state(), &SubmitState::Verified);
    assert_eq!(flow.input().code(), "222222");
}
