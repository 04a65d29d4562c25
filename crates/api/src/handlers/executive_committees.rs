//! Handlers for the `/executive-committees` resource.
//!
//! Board members grouped by committee year, ordered by their explicit
//! `ordering` within a year. Reads are public, writes admin only.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use ypsl_core::error::CoreError;
use ypsl_core::policy;
use ypsl_core::types::DbId;
use ypsl_db::models::executive_committee::{
    CreateExecutiveCommitteeMember, ExecutiveCommitteeMember, UpdateExecutiveCommitteeMember,
};
use ypsl_db::repositories::ExecutiveCommitteeRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Query parameters for `GET /executive-committees`.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub year: Option<String>,
}

fn require_admin(user: &AuthUser) -> AppResult<()> {
    if policy::admin_only(Some(&user.principal)).is_deny() {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only admins may manage executive committees".into(),
        )));
    }
    Ok(())
}

/// POST /api/v1/executive-committees
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateExecutiveCommitteeMember>,
) -> AppResult<(StatusCode, Json<ExecutiveCommitteeMember>)> {
    require_admin(&user)?;
    let member = ExecutiveCommitteeRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(member)))
}

/// GET /api/v1/executive-committees
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<ExecutiveCommitteeMember>>> {
    let members = ExecutiveCommitteeRepo::list(&state.pool, query.year.as_deref()).await?;
    Ok(Json(members))
}

/// GET /api/v1/executive-committees/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ExecutiveCommitteeMember>> {
    let member = ExecutiveCommitteeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ExecutiveCommitteeMember",
            id,
        }))?;
    Ok(Json(member))
}

/// PUT /api/v1/executive-committees/{id}
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateExecutiveCommitteeMember>,
) -> AppResult<Json<ExecutiveCommitteeMember>> {
    require_admin(&user)?;
    let member = ExecutiveCommitteeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ExecutiveCommitteeMember",
            id,
        }))?;
    Ok(Json(member))
}

/// DELETE /api/v1/executive-committees/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    require_admin(&user)?;
    let deleted = ExecutiveCommitteeRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "ExecutiveCommitteeMember",
            id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}
