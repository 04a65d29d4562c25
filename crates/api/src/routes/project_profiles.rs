//! Route definitions for the `/project-profiles` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::project_profiles;
use crate::state::AppState;

/// Routes mounted at `/project-profiles`: public reads, admin-only writes over public project profiles.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project_profiles::list).post(project_profiles::create))
        .route(
            "/{id}",
            get(project_profiles::get_by_id)
                .put(project_profiles::update)
                .delete(project_profiles::delete),
        )
}
