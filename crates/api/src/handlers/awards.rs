//! Handlers for the `/awards` resource.
//!
//! Recognitions the chapter has received, shown on the public site.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use ypsl_core::error::CoreError;
use ypsl_core::policy;
use ypsl_core::types::DbId;
use ypsl_db::models::award::{Award, CreateAward, UpdateAward};
use ypsl_db::repositories::AwardRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

fn require_admin(user: &AuthUser) -> AppResult<()> {
    if policy::admin_only(Some(&user.principal)).is_deny() {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only admins may manage awards".into(),
        )));
    }
    Ok(())
}

/// POST /api/v1/awards
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateAward>,
) -> AppResult<(StatusCode, Json<Award>)> {
    require_admin(&user)?;
    let award = AwardRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(award)))
}

/// GET /api/v1/awards
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Award>>> {
    let awards = AwardRepo::list(&state.pool).await?;
    Ok(Json(awards))
}

/// GET /api/v1/awards/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Award>> {
    let award = AwardRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Award", id }))?;
    Ok(Json(award))
}

/// PUT /api/v1/awards/{id}
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAward>,
) -> AppResult<Json<Award>> {
    require_admin(&user)?;
    let award = AwardRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Award", id }))?;
    Ok(Json(award))
}

/// DELETE /api/v1/awards/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    require_admin(&user)?;
    let deleted = AwardRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Award", id }));
    }
    Ok(StatusCode::NO_CONTENT)
}
