//! Transactional email via a Resend-compatible REST endpoint.
//!
//! [`EmailClient`] POSTs a JSON payload (`from`, `to`, `subject`, `html`)
//! with a bearer API key. The endpoint URL lives in [`EmailConfig`] so
//! tests can target a stub server.

use serde::Serialize;

/// Default Resend REST endpoint.
const DEFAULT_ENDPOINT: &str = "https://api.resend.com/emails";

/// Default sender when `EMAIL_FROM` is not set.
const DEFAULT_FROM_ADDRESS: &str = "YPSL <noreply@ieeeypsl.org>";

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Errors from the email integration.
#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The remote endpoint returned a non-2xx status code.
    #[error("Email API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

// ---------------------------------------------------------------------------
// EmailConfig
// ---------------------------------------------------------------------------

/// Configuration for the transactional email client.
#[derive(Debug, Clone)]
pub struct EmailConfig {
    /// API key sent as a bearer token.
    pub api_key: String,
    /// RFC 5322 "From" header, display name allowed.
    pub from_address: String,
    /// Address that receives admin copies of order alerts.
    pub admin_address: String,
    /// REST endpoint messages are POSTed to.
    pub endpoint: String,
}

impl EmailConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` if `RESEND_API_KEY` is not set, signalling that
    /// email delivery is not configured and sends should be skipped.
    ///
    /// | Variable          | Required | Default                          |
    /// |-------------------|----------|----------------------------------|
    /// | `RESEND_API_KEY`  | yes      | (none)                                |
    /// | `EMAIL_FROM`      | no       | `YPSL <noreply@ieeeypsl.org>`    |
    /// | `EMAIL_ADMIN`     | no       | value of `EMAIL_FROM`            |
    /// | `EMAIL_ENDPOINT`  | no       | `https://api.resend.com/emails`  |
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var("RESEND_API_KEY").ok()?;
        let from_address =
            std::env::var("EMAIL_FROM").unwrap_or_else(|_| DEFAULT_FROM_ADDRESS.to_string());
        let admin_address =
            std::env::var("EMAIL_ADMIN").unwrap_or_else(|_| from_address.clone());
        Some(Self {
            api_key,
            from_address,
            admin_address,
            endpoint: std::env::var("EMAIL_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string()),
        })
    }
}

// ---------------------------------------------------------------------------
// EmailClient
// ---------------------------------------------------------------------------

/// Wire payload for one outbound message.
#[derive(Serialize)]
struct SendRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html: &'a str,
}

/// Sends transactional HTML email.
pub struct EmailClient {
    client: reqwest::Client,
    config: EmailConfig,
}

impl EmailClient {
    /// Create a client with the shared HTTP client and given configuration.
    pub fn new(config: EmailConfig) -> Self {
        Self {
            client: crate::http_client(),
            config,
        }
    }

    /// Address used for admin notifications.
    pub fn admin_address(&self) -> &str {
        &self.config.admin_address
    }

    /// Send one HTML message to `to`.
    pub async fn send(&self, to: &str, subject: &str, html: &str) -> Result<(), EmailError> {
        let payload = SendRequest {
            from: &self.config.from_address,
            to,
            subject,
            html,
        };

        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(&self.config.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(EmailError::Api {
                status: status.as_u16(),
                body,
            });
        }

        tracing::info!(to, subject, "Sent email");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_env_requires_api_key() {
        // RESEND_API_KEY is not set in the test environment.
        assert!(EmailConfig::from_env().is_none());
    }

    #[test]
    fn error_display_api() {
        let err = EmailError::Api {
            status: 422,
            body: "invalid from".into(),
        };
        assert_eq!(err.to_string(), "Email API error (422): invalid from");
    }

    #[test]
    fn send_request_serializes_expected_fields() {
        let payload = SendRequest {
            from: "YPSL <noreply@ieeeypsl.org>",
            to: "nadee@example.com",
            subject: "Order Confirmation",
            html: "<p>hi</p>",
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["from"], "YPSL <noreply@ieeeypsl.org>");
        assert_eq!(json["to"], "nadee@example.com");
        assert_eq!(json["subject"], "Order Confirmation");
        assert_eq!(json["html"], "<p>hi</p>");
    }
}
