//! Handlers for the `/project-profiles` resource.
//!
//! Public-facing cards describing each flagship project. Anyone may read
//! them; only global staff curate the set.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use ypsl_core::error::CoreError;
use ypsl_core::policy;
use ypsl_core::types::DbId;
use ypsl_db::models::project_profile::{
    CreateProjectProfile, ProjectProfile, UpdateProjectProfile,
};
use ypsl_db::repositories::ProjectProfileRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

fn require_admin(user: &AuthUser) -> AppResult<()> {
    if policy::admin_only(Some(&user.principal)).is_deny() {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only admins may manage project profiles".into(),
        )));
    }
    Ok(())
}

/// POST /api/v1/project-profiles
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateProjectProfile>,
) -> AppResult<(StatusCode, Json<ProjectProfile>)> {
    require_admin(&user)?;
    let profile = ProjectProfileRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(profile)))
}

/// GET /api/v1/project-profiles
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ProjectProfile>>> {
    let profiles = ProjectProfileRepo::list(&state.pool).await?;
    Ok(Json(profiles))
}

/// GET /api/v1/project-profiles/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProjectProfile>> {
    let profile = ProjectProfileRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ProjectProfile",
            id,
        }))?;
    Ok(Json(profile))
}

/// PUT /api/v1/project-profiles/{id}
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProjectProfile>,
) -> AppResult<Json<ProjectProfile>> {
    require_admin(&user)?;
    let profile = ProjectProfileRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ProjectProfile",
            id,
        }))?;
    Ok(Json(profile))
}

/// DELETE /api/v1/project-profiles/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    require_admin(&user)?;
    let deleted = ProjectProfileRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "ProjectProfile",
            id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}
