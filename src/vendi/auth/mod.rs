//! Email verification feature: the six-cell OTP input manager, the resend
//! throttle, and the flow that submits assembled codes to the verification
//! endpoints. Flow state belongs to one flow value and is dropped with it.
//! This module touches account identifiers and must avoid logging codes.

pub mod client;
pub mod countdown;
pub mod flow;
pub mod otp;
pub mod types;
pub mod utils;
