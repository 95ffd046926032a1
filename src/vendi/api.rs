//! HTTP plumbing for the commerce API. Feature clients go through these
//! helpers so every request shares the same user agent, timeout policy, and
//! error mapping. The helpers never store tokens; authenticated calls attach
//! the session header from the `SecretString` the caller provides.

use crate::vendi::error::Error;
use crate::APP_USER_AGENT;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error};
use ulid::Ulid;
use url::Url;

/// Header carrying the session token for authenticated endpoints.
pub(crate) const SESSION_HEADER: &str = "x-vendi-session";
/// Per-request correlation id, echoed back by the service in support logs.
const REQUEST_ID_HEADER: &str = "x-request-id";
/// Client-side deadline applied to every request.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
/// Maximum number of error body characters surfaced to the user.
const MAX_ERROR_CHARS: usize = 200;

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    /// Build a client for the given API base URL.
    ///
    /// # Errors
    /// Returns `Error::Config` if the base URL is unusable or the underlying
    /// HTTP client cannot be constructed.
    pub fn new(base_url: &str) -> Result<Self, Error> {
        // Reject a bad base URL here rather than on the first call
        endpoint_url(base_url, "/")?;

        let client = Client::builder()
            .user_agent(APP_USER_AGENT)
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .map_err(|err| Error::Config(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self {
            base_url: base_url.to_string(),
            client,
        })
    }

    /// Posts JSON and parses a JSON response.
    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
        session: Option<&SecretString>,
    ) -> Result<T, Error> {
        let url = endpoint_url(&self.base_url, endpoint)?;
        let request_id = Ulid::new().to_string();

        debug!("POST {url} request-id {request_id}");

        let mut request = self
            .client
            .post(&url)
            .header(REQUEST_ID_HEADER, &request_id)
            .json(body);

        if let Some(token) = session {
            request = request.header(SESSION_HEADER, token.expose_secret());
        }

        let response = request.send().await.map_err(map_request_error)?;

        handle_json_response(response).await
    }

    /// Fetches JSON from an endpoint.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        session: Option<&SecretString>,
    ) -> Result<T, Error> {
        let url = endpoint_url(&self.base_url, endpoint)?;
        let request_id = Ulid::new().to_string();

        debug!("GET {url} request-id {request_id}");

        let mut request = self.client.get(&url).header(REQUEST_ID_HEADER, &request_id);

        if let Some(token) = session {
            request = request.header(SESSION_HEADER, token.expose_secret());
        }

        let response = request.send().await.map_err(map_request_error)?;

        handle_json_response(response).await
    }
}

/// Builds a full endpoint URL from the configured base URL.
pub(crate) fn endpoint_url(base_url: &str, endpoint: &str) -> Result<String, Error> {
    let url = Url::parse(base_url)
        .map_err(|err| Error::Config(format!("Invalid API base URL: {err}")))?;

    let scheme = url.scheme();

    let host = url
        .host()
        .ok_or_else(|| Error::Config("Invalid API base URL: no host specified".to_string()))?
        .to_owned();

    let port = match url.port() {
        Some(p) => p,
        None => match scheme {
            "http" => 80,
            "https" => 443,
            _ => {
                return Err(Error::Config(format!(
                    "Invalid API base URL: unsupported scheme {scheme}"
                )))
            }
        },
    };

    Ok(format!("{scheme}://{host}:{port}{endpoint}"))
}

/// Maps transport failures into the user-facing error kinds.
fn map_request_error(err: reqwest::Error) -> Error {
    if err.is_timeout() {
        Error::Timeout("Request timed out. Please try again.".to_string())
    } else {
        Error::Network(format!("Unable to reach the server: {err}"))
    }
}

/// Parses JSON responses and surfaces HTTP errors with sanitized bodies.
async fn handle_json_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, Error> {
    let status = response.status();

    if status.is_success() {
        response
            .json::<T>()
            .await
            .map_err(|err| Error::Parse(format!("Failed to decode response: {err}")))
    } else {
        let body = response.text().await.unwrap_or_default();

        error!("Request failed with status {status}");

        Err(Error::Http {
            status: status.as_u16(),
            message: sanitize_body(&body),
        })
    }
}

/// Trims an error body down to user-facing text, preferring the service
/// message field when the body is the JSON envelope.
fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "Request failed.".to_string();
    }

    if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
        if let Some(message) = value["message"].as_str() {
            if !message.is_empty() {
                return message.chars().take(MAX_ERROR_CHARS).collect();
            }
        }
    }

    trimmed.chars().take(MAX_ERROR_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_url_default_https_port() {
        let url = endpoint_url("https://api.vendi.dev", "/v1/auth/verify-otp").expect("url");
        assert_eq!(url, "https://api.vendi.dev:443/v1/auth/verify-otp");
    }

    #[test]
    fn endpoint_url_keeps_explicit_port() {
        let url = endpoint_url("http://localhost:8080", "/v1/auth/resend-otp").expect("url");
        assert_eq!(url, "http://localhost:8080/v1/auth/resend-otp");
    }

    #[test]
    fn endpoint_url_rejects_unsupported_scheme() {
        let err = endpoint_url("ftp://api.vendi.dev", "/v1/rewards/history").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn endpoint_url_rejects_missing_host() {
        let err = endpoint_url("https://", "/v1/rewards/history").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn new_rejects_bad_base_url() {
        let err = ApiClient::new("not a url").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn sanitize_body_prefers_service_message() {
        let body = r#"{"success":false,"message":"Code expired"}"#;
        assert_eq!(sanitize_body(body), "Code expired");
    }

    #[test]
    fn sanitize_body_falls_back_on_empty() {
        assert_eq!(sanitize_body("   "), "Request failed.");
    }

    #[test]
    fn sanitize_body_truncates_long_bodies() {
        let body = "x".repeat(1000);
        assert_eq!(sanitize_body(&body).len(), 200);
    }
}
