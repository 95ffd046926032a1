//! Request and response types for the auth endpoints. Passwords ride through
//! `LoginRequest` only long enough to serialize; they must never be logged.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VerifyOtpRequest {
    pub email: String,
    pub otp: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ResendOtpRequest {
    pub email: String,
}

/// Envelope every OTP endpoint replies with on 2xx.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct OtpResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn otp_response_message_is_optional() {
        let response: OtpResponse = serde_json::from_str(r#"{"success":true}"#).expect("json");
        assert!(response.success);
        assert_eq!(response.message, None);
    }

    #[test]
    fn otp_response_carries_service_message() {
        let response: OtpResponse =
            serde_json::from_str(r#"{"success":false,"message":"Code expired"}"#).expect("json");
        assert!(!response.success);
        assert_eq!(response.message.as_deref(), Some("Code expired"));
    }

    #[test]
    fn verify_request_wire_shape() {
        let request = VerifyOtpRequest {
            email: "alice@example.com".to_string(),
            otp: "123456".to_string(),
        };
        let json = serde_json::to_value(&request).expect("json");
        assert_eq!(json["email"], "alice@example.com");
        assert_eq!(json["otp"], "123456");
    }
}
