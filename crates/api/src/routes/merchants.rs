//! Route definitions for the `/merchants` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::merchants;
use crate::state::AppState;

/// Routes mounted at `/merchants`: public reads, admin-only writes over merchandise listings.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(merchants::list).post(merchants::create))
        .route(
            "/{id}",
            get(merchants::get_by_id)
                .put(merchants::update)
                .delete(merchants::delete),
        )
}
