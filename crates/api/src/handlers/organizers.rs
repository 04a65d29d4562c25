//! Handlers for the `/organizers` resource.
//!
//! Organizing bodies referenced by events (the chapter itself, partner
//! societies, student branches). Public reads, admin-only writes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use ypsl_core::error::CoreError;
use ypsl_core::policy;
use ypsl_core::types::DbId;
use ypsl_db::models::organizer::{CreateOrganizer, Organizer, UpdateOrganizer};
use ypsl_db::repositories::OrganizerRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

fn require_admin(user: &AuthUser) -> AppResult<()> {
    if policy::admin_only(Some(&user.principal)).is_deny() {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only admins may manage organizers".into(),
        )));
    }
    Ok(())
}

/// POST /api/v1/organizers
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateOrganizer>,
) -> AppResult<(StatusCode, Json<Organizer>)> {
    require_admin(&user)?;
    let organizer = OrganizerRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(organizer)))
}

/// GET /api/v1/organizers
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Organizer>>> {
    let organizers = OrganizerRepo::list(&state.pool).await?;
    Ok(Json(organizers))
}

/// GET /api/v1/organizers/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Organizer>> {
    let organizer = OrganizerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Organizer",
            id,
        }))?;
    Ok(Json(organizer))
}

/// PUT /api/v1/organizers/{id}
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateOrganizer>,
) -> AppResult<Json<Organizer>> {
    require_admin(&user)?;
    let organizer = OrganizerRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Organizer",
            id,
        }))?;
    Ok(Json(organizer))
}

/// DELETE /api/v1/organizers/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    require_admin(&user)?;
    let deleted = OrganizerRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Organizer",
            id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}
