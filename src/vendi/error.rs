//! Error kinds surfaced by the client core. `Validation` and `Service` carry
//! user-facing text verbatim; the rest are prefixed so logs stay searchable.
//! No kind is retried automatically; the user resubmits or requests a resend.

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    Validation(String),
    Config(String),
    Network(String),
    Timeout(String),
    Http { status: u16, message: String },
    Service(String),
    Parse(String),
}

impl fmt::Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Validation(message) | Error::Service(message) => {
                write!(formatter, "{message}")
            }
            Error::Config(message) => write!(formatter, "Config error: {message}"),
            Error::Network(message) => write!(formatter, "Network error: {message}"),
            Error::Timeout(message) => write!(formatter, "Timeout: {message}"),
            Error::Http { status, message } => {
                write!(formatter, "Request failed ({status}): {message}")
            }
            Error::Parse(message) => write!(formatter, "Response error: {message}"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_message_is_surfaced_verbatim() {
        let err = Error::Service("Code expired".to_string());
        assert_eq!(err.to_string(), "Code expired");
    }

    #[test]
    fn http_errors_carry_status() {
        let err = Error::Http {
            status: 502,
            message: "Bad gateway".to_string(),
        };
        assert_eq!(err.to_string(), "Request failed (502): Bad gateway");
    }
}
