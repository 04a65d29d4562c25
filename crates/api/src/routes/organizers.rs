//! Route definitions for the `/organizers` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::organizers;
use crate::state::AppState;

/// Routes mounted at `/organizers`: public reads, admin-only writes over event organizers.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(organizers::list).post(organizers::create))
        .route(
            "/{id}",
            get(organizers::get_by_id)
                .put(organizers::update)
                .delete(organizers::delete),
        )
}
