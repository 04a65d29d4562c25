//! Outbound integrations for the YPSL backend.
//!
//! Three concerns live here, each optional at runtime and configured
//! independently from environment variables:
//!
//! - [`sheets`]: appends merchandise order rows to a Google Sheet using a
//!   service-account JWT-bearer OAuth flow.
//! - [`email`]: sends transactional HTML email through a Resend-compatible
//!   REST endpoint.
//! - [`storage`]: persists uploaded media files behind a provider trait.
//!
//! Missing configuration never fails startup. The sheets and email
//! `from_env` constructors return `None` and callers degrade gracefully,
//! so the order intake path keeps working when a downstream service is
//! not wired up; storage falls back to local-disk defaults.

pub mod email;
pub mod sheets;
pub mod storage;

use std::time::Duration;

/// Timeout applied to every outbound HTTP request.
pub(crate) const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Build the shared HTTP client used by the sheets and email integrations.
pub(crate) fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .expect("Failed to build reqwest HTTP client")
}
