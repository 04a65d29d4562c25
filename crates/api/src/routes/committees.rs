//! Route definitions for committee year groups and sub-committee members.

use axum::routing::get;
use axum::Router;

use crate::handlers::committees;
use crate::state::AppState;

/// Routes for `/committees` and `/sub-committees`.
///
/// ```text
/// GET    /committees            -> list years
/// POST   /committees            -> create year group (admin only)
/// GET    /committees/{id}       -> get, PUT update, DELETE delete
/// GET    /sub-committees        -> list members (?committee_id)
/// POST   /sub-committees        -> create member (admin only)
/// GET    /sub-committees/{id}   -> get, PUT update, DELETE delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/committees",
            get(committees::list).post(committees::create),
        )
        .route(
            "/committees/{id}",
            get(committees::get_by_id)
                .put(committees::update)
                .delete(committees::delete),
        )
        .route(
            "/sub-committees",
            get(committees::list_members).post(committees::create_member),
        )
        .route(
            "/sub-committees/{id}",
            get(committees::get_member_by_id)
                .put(committees::update_member)
                .delete(committees::delete_member),
        )
}
