//! Route definitions for the `/awards` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::awards;
use crate::state::AppState;

/// Routes mounted at `/awards`: public reads, admin-only writes over awards.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(awards::list).post(awards::create))
        .route(
            "/{id}",
            get(awards::get_by_id)
                .put(awards::update)
                .delete(awards::delete),
        )
}
