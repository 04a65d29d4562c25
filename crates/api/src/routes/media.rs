//! Route definitions for the `/media` resource.

use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;

use crate::handlers::media;
use crate::state::AppState;

/// Maximum accepted upload size for general media (10 MiB).
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Routes mounted at `/media`.
///
/// ```text
/// GET    /       -> list (?category; payslips hidden from the public)
/// POST   /       -> upload (multipart, requires auth)
/// GET    /{id}   -> get_by_id
/// PUT    /{id}   -> update metadata (alt, category)
/// DELETE /{id}   -> delete (admin only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(media::list).post(media::upload))
        .route(
            "/{id}",
            get(media::get_by_id)
                .put(media::update)
                .delete(media::delete),
        )
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
}
