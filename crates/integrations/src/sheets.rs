//! Google Sheets order-log integration.
//!
//! [`SheetsClient`] authenticates as a service account using the OAuth 2.0
//! JWT-bearer flow: it signs an RS256 assertion with the account's private
//! key, exchanges it for a short-lived bearer token, then appends one row
//! per merchandise order to the configured spreadsheet.
//!
//! The token and API endpoints are part of [`SheetsConfig`] so tests can
//! point the client at a stub server instead of Google.

use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};

/// OAuth scope granting spreadsheet write access.
const SPREADSHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";

/// Assertion lifetime in seconds (Google caps this at one hour).
const ASSERTION_TTL_SECS: i64 = 3600;

/// Default OAuth token endpoint.
const DEFAULT_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

/// Default Sheets REST API base URL.
const DEFAULT_API_URL: &str = "https://sheets.googleapis.com";

/// Default A1 range the order rows are appended under.
const DEFAULT_RANGE: &str = "Orders!A:N";

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Errors from the Sheets integration.
#[derive(Debug, thiserror::Error)]
pub enum SheetsError {
    /// The service-account private key could not be parsed or the
    /// assertion could not be signed.
    #[error("Failed to sign service-account assertion: {0}")]
    Assertion(#[from] jsonwebtoken::errors::Error),

    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The remote endpoint returned a non-2xx status code.
    #[error("Sheets API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

// ---------------------------------------------------------------------------
// SheetsConfig
// ---------------------------------------------------------------------------

/// Configuration for the Sheets order-log client.
#[derive(Debug, Clone)]
pub struct SheetsConfig {
    /// Service-account email, used as issuer and subject of the assertion.
    pub client_email: String,
    /// PEM-encoded RSA private key for the service account.
    pub private_key: String,
    /// Target spreadsheet identifier.
    pub spreadsheet_id: String,
    /// OAuth token-exchange endpoint.
    pub token_url: String,
    /// Sheets REST API base URL.
    pub api_url: String,
    /// A1 range rows are appended under.
    pub range: String,
}

impl SheetsConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` unless all three credential variables are set,
    /// signalling that the order log is not configured and appends
    /// should be skipped.
    ///
    /// | Variable                      | Required | Default                              |
    /// |-------------------------------|----------|--------------------------------------|
    /// | `GOOGLE_SHEETS_CLIENT_EMAIL`  | yes      | (none)                                    |
    /// | `GOOGLE_SHEETS_PRIVATE_KEY`   | yes      | (none)                                    |
    /// | `GOOGLE_SHEETS_SPREADSHEET_ID`| yes      | (none)                                    |
    /// | `GOOGLE_SHEETS_TOKEN_URL`     | no       | `https://oauth2.googleapis.com/token`|
    /// | `GOOGLE_SHEETS_API_URL`       | no       | `https://sheets.googleapis.com`      |
    /// | `GOOGLE_SHEETS_RANGE`         | no       | `Orders!A:N`                         |
    pub fn from_env() -> Option<Self> {
        let client_email = std::env::var("GOOGLE_SHEETS_CLIENT_EMAIL").ok()?;
        let private_key = std::env::var("GOOGLE_SHEETS_PRIVATE_KEY").ok()?;
        let spreadsheet_id = std::env::var("GOOGLE_SHEETS_SPREADSHEET_ID").ok()?;
        Some(Self {
            client_email,
            // Env vars often carry the key with literal \n escapes.
            private_key: private_key.replace("\\n", "\n"),
            spreadsheet_id,
            token_url: std::env::var("GOOGLE_SHEETS_TOKEN_URL")
                .unwrap_or_else(|_| DEFAULT_TOKEN_URL.to_string()),
            api_url: std::env::var("GOOGLE_SHEETS_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            range: std::env::var("GOOGLE_SHEETS_RANGE")
                .unwrap_or_else(|_| DEFAULT_RANGE.to_string()),
        })
    }
}

// ---------------------------------------------------------------------------
// OrderRow
// ---------------------------------------------------------------------------

/// One merchandise order as it appears in the spreadsheet.
///
/// The column order is fixed; [`OrderRow::into_values`] produces the
/// fourteen cells the sheet expects.
#[derive(Debug, Clone)]
pub struct OrderRow {
    pub order_id: String,
    pub timestamp: String,
    pub full_name: String,
    pub email: String,
    pub whatsapp: String,
    pub product: String,
    pub size: String,
    pub quantity: String,
    pub delivery_method: String,
    pub address: String,
    pub ieee_member: bool,
    pub ieee_member_id: String,
    pub payment_slip_url: String,
}

impl OrderRow {
    /// Render the row as sheet cells: Order ID, Timestamp, Full Name,
    /// Email, WhatsApp, Product, Size, Quantity, Delivery Method,
    /// Address, IEEE Member, Member ID, Status, Payment Slip URL.
    ///
    /// New orders always land with status `Pending`.
    pub fn into_values(self) -> Vec<String> {
        vec![
            self.order_id,
            self.timestamp,
            self.full_name,
            self.email,
            self.whatsapp,
            self.product,
            self.size,
            self.quantity,
            self.delivery_method,
            self.address,
            (if self.ieee_member { "Yes" } else { "No" }).to_string(),
            self.ieee_member_id,
            "Pending".to_string(),
            self.payment_slip_url,
        ]
    }
}

// ---------------------------------------------------------------------------
// SheetsClient
// ---------------------------------------------------------------------------

/// Claims of the JWT-bearer assertion exchanged for an access token.
#[derive(Serialize)]
struct AssertionClaims<'a> {
    iss: &'a str,
    sub: &'a str,
    scope: &'a str,
    aud: &'a str,
    exp: i64,
    iat: i64,
}

/// Relevant part of the token-exchange response.
#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Appends order rows to the configured spreadsheet.
pub struct SheetsClient {
    client: reqwest::Client,
    config: SheetsConfig,
}

impl SheetsClient {
    /// Create a client with the shared HTTP client and given configuration.
    pub fn new(config: SheetsConfig) -> Self {
        Self {
            client: crate::http_client(),
            config,
        }
    }

    /// Append a single order row.
    ///
    /// A fresh bearer token is obtained per call; order volume is far
    /// too low for token caching to matter.
    pub async fn append_order(&self, row: OrderRow) -> Result<(), SheetsError> {
        let token = self.fetch_access_token().await?;

        let url = format!(
            "{}/v4/spreadsheets/{}/values/{}:append?valueInputOption=USER_ENTERED",
            self.config.api_url, self.config.spreadsheet_id, self.config.range
        );
        let body = serde_json::json!({ "values": [row.into_values()] });

        let response = self
            .client
            .post(url)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await?;
        Self::check_status(response).await?;

        tracing::info!(spreadsheet_id = %self.config.spreadsheet_id, "Appended order row");
        Ok(())
    }

    /// Sign the RS256 assertion and exchange it for a bearer token.
    async fn fetch_access_token(&self) -> Result<String, SheetsError> {
        let now = Utc::now().timestamp();
        let claims = AssertionClaims {
            iss: &self.config.client_email,
            sub: &self.config.client_email,
            scope: SPREADSHEETS_SCOPE,
            aud: &self.config.token_url,
            exp: now + ASSERTION_TTL_SECS,
            iat: now,
        };

        let key = EncodingKey::from_rsa_pem(self.config.private_key.as_bytes())?;
        let assertion = jsonwebtoken::encode(&Header::new(Algorithm::RS256), &claims, &key)?;

        let response = self
            .client
            .post(&self.config.token_url)
            .form(&[
                ("grant_type", "urn:ietf:params:oauth:grant-type:jwt-bearer"),
                ("assertion", assertion.as_str()),
            ])
            .send()
            .await?;
        let response = Self::check_status(response).await?;

        let token: TokenResponse = response.json().await?;
        Ok(token.access_token)
    }

    /// Turn a non-2xx response into [`SheetsError::Api`] with its body.
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, SheetsError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(SheetsError::Api {
            status: status.as_u16(),
            body,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> OrderRow {
        OrderRow {
            order_id: "YPSL-ORD-20260829-4821".into(),
            timestamp: "8/29/2026, 10:15:00 AM".into(),
            full_name: "Nadee Perera".into(),
            email: "nadee@example.com".into(),
            whatsapp: "+94771234567".into(),
            product: "YPSL Hoodie".into(),
            size: "M".into(),
            quantity: "2".into(),
            delivery_method: "courier".into(),
            address: "12 Galle Rd, Colombo".into(),
            ieee_member: true,
            ieee_member_id: "98765432".into(),
            payment_slip_url: "https://ypsl.lk/media/YPSL-ORD-20260829-4821.jpg".into(),
        }
    }

    #[test]
    fn row_renders_fourteen_cells_in_order() {
        let values = sample_row().into_values();
        assert_eq!(values.len(), 14);
        assert_eq!(values[0], "YPSL-ORD-20260829-4821");
        assert_eq!(values[10], "Yes");
        assert_eq!(values[12], "Pending");
        assert_eq!(values[13], "https://ypsl.lk/media/YPSL-ORD-20260829-4821.jpg");
    }

    #[test]
    fn non_member_renders_no() {
        let mut row = sample_row();
        row.ieee_member = false;
        row.ieee_member_id = "N/A".into();
        let values = row.into_values();
        assert_eq!(values[10], "No");
        assert_eq!(values[11], "N/A");
    }

    #[test]
    fn from_env_requires_credentials() {
        // None of the GOOGLE_SHEETS_* vars are set in the test environment.
        assert!(SheetsConfig::from_env().is_none());
    }

    #[test]
    fn error_display_api() {
        let err = SheetsError::Api {
            status: 403,
            body: "forbidden".into(),
        };
        assert_eq!(err.to_string(), "Sheets API error (403): forbidden");
    }
}
