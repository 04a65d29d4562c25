//! Route definitions for the `/merch-categories` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::merch_categories;
use crate::state::AppState;

/// Routes mounted at `/merch-categories`: public reads, admin-only writes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(merch_categories::list).post(merch_categories::create),
        )
        .route(
            "/{id}",
            get(merch_categories::get_by_id)
                .put(merch_categories::update)
                .delete(merch_categories::delete),
        )
}
