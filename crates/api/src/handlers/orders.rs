//! Public merchandise order intake.
//!
//! The order pipeline runs four stages per submission:
//!
//! 1. parse the multipart form, derive the order id and timestamp, and
//!    hard-reject oversized payment slips before any side effect runs;
//! 2. store the payment slip through the media collection (best-effort);
//! 3. append one row to the order spreadsheet (best-effort);
//! 4. send the customer confirmation and the admin alert, each
//!    independently (best-effort).
//!
//! Only stage 1's size check and a failure of the parsing itself can turn
//! into a client-visible error. Every later stage logs and continues, so
//! the customer always walks away with an order id once parsing is done.
//! Operators reconcile missing side effects from the logs.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use ypsl_core::order::{new_order_id, order_timestamp};
use ypsl_core::policy::PAYSLIP_CATEGORY;
use ypsl_db::models::media::CreateMedia;
use ypsl_db::repositories::MediaRepo;
use ypsl_integrations::sheets::OrderRow;

use crate::notifications::order_emails::{
    self, admin_alert_html, customer_confirmation_html, OrderDetails,
};
use crate::state::AppState;

/// Hard cap on the payment slip. Exceeding it rejects the whole request
/// before any side effect is attempted.
const MAX_SLIP_BYTES: usize = 1024 * 1024;

/// Sentinel recorded wherever an optional value or a failed upload leaves
/// a column empty. The spreadsheet has no empty cells.
const NOT_AVAILABLE: &str = "N/A";

/// Extension used when neither the filename nor the MIME type yields one.
const FALLBACK_EXTENSION: &str = "jpg";

// ---------------------------------------------------------------------------
// Submission parsing
// ---------------------------------------------------------------------------

/// Typed view of the submitted form. All text fields default to empty;
/// field-level validation beyond the slip size cap is the storefront's
/// responsibility.
#[derive(Debug, Default)]
struct OrderSubmission {
    full_name: String,
    email: String,
    whatsapp: String,
    address: String,
    product: String,
    size: String,
    quantity: String,
    delivery_method: String,
    ieee_member: bool,
    ieee_member_id: String,
    payment_slip: Option<SlipUpload>,
}

#[derive(Debug)]
struct SlipUpload {
    filename: String,
    mime_type: String,
    bytes: Vec<u8>,
}

impl SlipUpload {
    /// Extension for the stored copy: taken from the filename, falling
    /// back to the MIME subtype, then to a fixed default. Lowercased.
    fn extension(&self) -> String {
        let from_filename = self
            .filename
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .filter(|ext| !ext.is_empty());
        let from_mime = self.mime_type.split_once('/').map(|(_, sub)| sub);
        from_filename
            .or(from_mime)
            .filter(|ext| !ext.is_empty())
            .unwrap_or(FALLBACK_EXTENSION)
            .to_ascii_lowercase()
    }
}

#[derive(Debug, thiserror::Error)]
enum IntakeError {
    #[error("File size exceeds 1MB limit")]
    SlipTooLarge,

    #[error("Invalid multipart body: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),
}

async fn parse_submission(mut multipart: Multipart) -> Result<OrderSubmission, IntakeError> {
    let mut submission = OrderSubmission::default();
    while let Some(field) = multipart.next_field().await? {
        match field.name().unwrap_or_default() {
            "fullName" => submission.full_name = field.text().await?,
            "email" => submission.email = field.text().await?,
            "whatsapp" => submission.whatsapp = field.text().await?,
            "address" => submission.address = field.text().await?,
            "product" => submission.product = field.text().await?,
            "size" => submission.size = field.text().await?,
            "quantity" => submission.quantity = field.text().await?,
            "deliveryMethod" => submission.delivery_method = field.text().await?,
            "ieeeMember" => submission.ieee_member = field.text().await? == "true",
            "ieeeMemberId" => submission.ieee_member_id = field.text().await?,
            "paymentSlip" => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let mime_type = field.content_type().unwrap_or_default().to_string();
                let bytes = field.bytes().await?.to_vec();
                if bytes.len() > MAX_SLIP_BYTES {
                    return Err(IntakeError::SlipTooLarge);
                }
                submission.payment_slip = Some(SlipUpload {
                    filename,
                    mime_type,
                    bytes,
                });
            }
            _ => {}
        }
    }
    Ok(submission)
}

fn or_not_available(value: &str) -> String {
    if value.trim().is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        value.to_string()
    }
}

// ---------------------------------------------------------------------------
// Handler
// ---------------------------------------------------------------------------

/// POST /api/v1/merch/order
///
/// Public, unauthenticated. Responds `200 {success:true, orderId}` once
/// the submission parses and the slip fits the cap, regardless of which
/// best-effort stages succeeded.
pub async fn submit(State(state): State<AppState>, multipart: Multipart) -> Response {
    let submission = match parse_submission(multipart).await {
        Ok(submission) => submission,
        Err(IntakeError::SlipTooLarge) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "success": false, "error": "File size exceeds 1MB limit" })),
            )
                .into_response();
        }
        Err(e) => {
            tracing::error!(error = %e, "Order submission could not be parsed");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false, "error": "Failed" })),
            )
                .into_response();
        }
    };

    let order_id = new_order_id();
    let timestamp = order_timestamp();
    tracing::info!(
        order_id = %order_id,
        product = %submission.product,
        "Order submission received"
    );

    let payment_slip_url = store_payment_slip(&state, &order_id, &submission).await;
    append_to_sheet(&state, &order_id, &timestamp, &submission, &payment_slip_url).await;
    send_notifications(&state, &order_id, &timestamp, &submission, &payment_slip_url).await;

    (
        StatusCode::OK,
        Json(json!({ "success": true, "orderId": order_id })),
    )
        .into_response()
}

// ---------------------------------------------------------------------------
// Best-effort stages
// ---------------------------------------------------------------------------

/// Stores the slip under `<orderId>.<ext>` in the payment-slip category
/// and returns its public URL, or the sentinel when no slip was attached
/// or the upload failed.
async fn store_payment_slip(
    state: &AppState,
    order_id: &str,
    submission: &OrderSubmission,
) -> String {
    let Some(slip) = &submission.payment_slip else {
        return NOT_AVAILABLE.to_string();
    };
    if slip.bytes.is_empty() {
        tracing::warn!(order_id, "Payment slip field was empty, nothing to store");
        return NOT_AVAILABLE.to_string();
    }

    let filename = format!("{order_id}.{}", slip.extension());
    let url = match state.storage.store(&filename, &slip.bytes).await {
        Ok(url) => url,
        Err(e) => {
            tracing::error!(error = %e, order_id, "Failed to store payment slip");
            return NOT_AVAILABLE.to_string();
        }
    };

    let record = CreateMedia {
        alt: format!("Payslip for {order_id} - {}", submission.full_name),
        category: PAYSLIP_CATEGORY.to_string(),
        filename,
        mime_type: slip.mime_type.clone(),
        size_bytes: slip.bytes.len() as i64,
        url: url.clone(),
    };
    if let Err(e) = MediaRepo::create(&state.pool, &record).await {
        tracing::error!(error = %e, order_id, "Failed to record payment slip");
        // The file is useless without its library row, so take it back out.
        if let Err(e) = state.storage.delete(&record.filename).await {
            tracing::warn!(error = %e, order_id, "Failed to remove orphaned payment slip");
        }
        return NOT_AVAILABLE.to_string();
    }

    url
}

async fn append_to_sheet(
    state: &AppState,
    order_id: &str,
    timestamp: &str,
    submission: &OrderSubmission,
    payment_slip_url: &str,
) {
    let Some(sheets) = &state.sheets else {
        tracing::warn!(order_id, "Sheets client not configured, skipping append");
        return;
    };

    let row = OrderRow {
        order_id: order_id.to_string(),
        timestamp: timestamp.to_string(),
        full_name: submission.full_name.clone(),
        email: submission.email.clone(),
        whatsapp: submission.whatsapp.clone(),
        product: submission.product.clone(),
        size: or_not_available(&submission.size),
        quantity: submission.quantity.clone(),
        delivery_method: submission.delivery_method.clone(),
        address: or_not_available(&submission.address),
        ieee_member: submission.ieee_member,
        ieee_member_id: or_not_available(&submission.ieee_member_id),
        payment_slip_url: payment_slip_url.to_string(),
    };
    if let Err(e) = sheets.append_order(row).await {
        tracing::error!(error = %e, order_id, "Failed to append order to sheet");
    }
}

/// Sends the customer confirmation and the admin alert. The two sends are
/// independent: one failing does not stop the other.
async fn send_notifications(
    state: &AppState,
    order_id: &str,
    timestamp: &str,
    submission: &OrderSubmission,
    payment_slip_url: &str,
) {
    let Some(email) = &state.email else {
        tracing::warn!(order_id, "Email client not configured, skipping notifications");
        return;
    };

    let details = OrderDetails {
        order_id: order_id.to_string(),
        timestamp: timestamp.to_string(),
        full_name: submission.full_name.clone(),
        email: submission.email.clone(),
        whatsapp: submission.whatsapp.clone(),
        address: or_not_available(&submission.address),
        product: submission.product.clone(),
        size: or_not_available(&submission.size),
        quantity: submission.quantity.clone(),
        delivery_method: submission.delivery_method.clone(),
        ieee_member: submission.ieee_member,
        ieee_member_id: submission.ieee_member_id.clone(),
        payment_slip_url: payment_slip_url.to_string(),
    };

    if let Err(e) = email
        .send(
            &details.email,
            &order_emails::customer_subject(order_id),
            &customer_confirmation_html(&details),
        )
        .await
    {
        tracing::error!(error = %e, order_id, "Failed to send customer confirmation");
    }

    if let Err(e) = email
        .send(
            email.admin_address(),
            &order_emails::admin_subject(order_id),
            &admin_alert_html(&details),
        )
        .await
    {
        tracing::error!(error = %e, order_id, "Failed to send admin alert");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slip(filename: &str, mime_type: &str) -> SlipUpload {
        SlipUpload {
            filename: filename.to_string(),
            mime_type: mime_type.to_string(),
            bytes: vec![0u8; 16],
        }
    }

    #[test]
    fn extension_prefers_filename() {
        assert_eq!(slip("receipt.PNG", "image/jpeg").extension(), "png");
    }

    #[test]
    fn extension_falls_back_to_mime_subtype() {
        assert_eq!(slip("receipt", "image/webp").extension(), "webp");
    }

    #[test]
    fn extension_defaults_when_nothing_is_usable() {
        assert_eq!(slip("", "").extension(), "jpg");
    }

    #[test]
    fn blank_optional_fields_become_sentinels() {
        assert_eq!(or_not_available("  "), "N/A");
        assert_eq!(or_not_available("XL"), "XL");
    }
}
