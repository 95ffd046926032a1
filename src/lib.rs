//! # Vendi (Mobile Commerce Client Core)
//!
//! `vendi` is the headless core behind the vendi mobile storefront. The
//! screens themselves live in the mobile shells; this crate owns the logic
//! they bind to:
//!
//! - **Email verification flow**: a six-cell one-time-code input manager, a
//!   resend throttle with a 30 second cooldown, and a submitter that talks to
//!   the verification endpoints. The flow is UI-framework agnostic: the shell
//!   forwards input events and one-second ticks, the flow answers with state.
//! - **Service clients**: typed wrappers over the commerce API (OTP
//!   verify/resend, login, rewards points history, vendor payout setup).
//!   Session tokens are secret material and are never logged.
//! - **CLI driver**: the `vendi` binary exercises every flow from a terminal,
//!   which is how the team smoke-tests against staging.
//!
//! Flow state lives only inside a flow value: it is created with the value
//! and dropped with it, never persisted. Failed attempts are never retried
//! automatically; the user resubmits or requests a new code.

pub mod cli;
pub mod vendi;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
