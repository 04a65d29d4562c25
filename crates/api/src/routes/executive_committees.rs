//! Route definitions for the `/executive-committees` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::executive_committees;
use crate::state::AppState;

/// Routes mounted at `/executive-committees`: public reads, admin-only writes over executive committee members.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(executive_committees::list).post(executive_committees::create))
        .route(
            "/{id}",
            get(executive_committees::get_by_id)
                .put(executive_committees::update)
                .delete(executive_committees::delete),
        )
}
