//! Route definitions for the `/faqs` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::faqs;
use crate::state::AppState;

/// Routes mounted at `/faqs`: public reads, admin-only writes over FAQ entries.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(faqs::list).post(faqs::create))
        .route(
            "/{id}",
            get(faqs::get_by_id)
                .put(faqs::update)
                .delete(faqs::delete),
        )
}
