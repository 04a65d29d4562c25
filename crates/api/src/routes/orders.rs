//! Route definitions for the public merchandise order intake.

use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;

use crate::handlers::orders;
use crate::state::AppState;

/// Multipart body limit for order submissions. Generous enough that the
/// handler's own 1 MiB slip check is what the client actually hits.
const MAX_ORDER_BODY_BYTES: usize = 4 * 1024 * 1024;

/// Routes mounted at `/merch`.
///
/// ```text
/// POST /order  -> submit order (public, multipart/form-data)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/order", post(orders::submit))
        .layer(DefaultBodyLimit::max(MAX_ORDER_BODY_BYTES))
}
