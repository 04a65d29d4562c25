//! Handlers for committee year groups and sub-committee members.
//!
//! Reads are public; writes are restricted to global staff. A member's
//! `full_name` is derived from the name parts at write time so list
//! ordering and search never depend on client formatting.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use ypsl_core::error::CoreError;
use ypsl_core::policy;
use ypsl_core::stamp::full_name;
use ypsl_core::types::DbId;
use ypsl_db::models::committee::{
    Committee, CreateCommittee, CreateSubCommitteeMember, SubCommitteeMember, UpdateCommittee,
    UpdateSubCommitteeMember,
};
use ypsl_db::repositories::{CommitteeRepo, SubCommitteeRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

fn require_admin(user: &AuthUser, action: &str) -> AppResult<()> {
    if policy::admin_only(Some(&user.principal)).is_deny() {
        return Err(AppError::Core(CoreError::Forbidden(format!(
            "Only admins may {action}"
        ))));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Committee year groups
// ---------------------------------------------------------------------------

/// POST /api/v1/committees
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateCommittee>,
) -> AppResult<(StatusCode, Json<Committee>)> {
    require_admin(&user, "create committees")?;
    let committee = CommitteeRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(committee)))
}

/// GET /api/v1/committees
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Committee>>> {
    let committees = CommitteeRepo::list(&state.pool).await?;
    Ok(Json(committees))
}

/// GET /api/v1/committees/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Committee>> {
    let committee = CommitteeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Committee",
            id,
        }))?;
    Ok(Json(committee))
}

/// PUT /api/v1/committees/{id}
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCommittee>,
) -> AppResult<Json<Committee>> {
    require_admin(&user, "update committees")?;
    let committee = CommitteeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Committee",
            id,
        }))?;
    Ok(Json(committee))
}

/// DELETE /api/v1/committees/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    require_admin(&user, "delete committees")?;
    let deleted = CommitteeRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Committee",
            id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Sub-committee members
// ---------------------------------------------------------------------------

/// Query parameters for `GET /sub-committees`.
#[derive(Debug, Deserialize)]
pub struct ListMembersQuery {
    pub committee_id: Option<DbId>,
}

/// POST /api/v1/sub-committees
pub async fn create_member(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateSubCommitteeMember>,
) -> AppResult<(StatusCode, Json<SubCommitteeMember>)> {
    require_admin(&user, "create sub-committee members")?;
    let name = full_name(&input.first_name, &input.last_name);
    let member = SubCommitteeRepo::create(&state.pool, &input, &name).await?;
    Ok((StatusCode::CREATED, Json(member)))
}

/// GET /api/v1/sub-committees
pub async fn list_members(
    State(state): State<AppState>,
    Query(query): Query<ListMembersQuery>,
) -> AppResult<Json<Vec<SubCommitteeMember>>> {
    let members = SubCommitteeRepo::list(&state.pool, query.committee_id).await?;
    Ok(Json(members))
}

/// GET /api/v1/sub-committees/{id}
pub async fn get_member_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<SubCommitteeMember>> {
    let member = SubCommitteeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "SubCommitteeMember",
            id,
        }))?;
    Ok(Json(member))
}

/// PUT /api/v1/sub-committees/{id}
///
/// `full_name` is re-derived whenever either name part changes.
pub async fn update_member(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSubCommitteeMember>,
) -> AppResult<Json<SubCommitteeMember>> {
    require_admin(&user, "update sub-committee members")?;

    let name = if input.first_name.is_some() || input.last_name.is_some() {
        let current = SubCommitteeRepo::find_by_id(&state.pool, id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "SubCommitteeMember",
                id,
            }))?;
        let first = input.first_name.as_deref().unwrap_or(&current.first_name);
        let last = input.last_name.as_deref().unwrap_or(&current.last_name);
        Some(full_name(first, last))
    } else {
        None
    };

    let member = SubCommitteeRepo::update(&state.pool, id, &input, name.as_deref())
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "SubCommitteeMember",
            id,
        }))?;
    Ok(Json(member))
}

/// DELETE /api/v1/sub-committees/{id}
pub async fn delete_member(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    require_admin(&user, "delete sub-committee members")?;
    let deleted = SubCommitteeRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "SubCommitteeMember",
            id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}
