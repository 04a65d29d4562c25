//! Handlers for the `/authors` resource.
//!
//! Authors without a project tag are public; project-tagged authors are
//! additionally visible to their own project's staff, so draft bylines
//! stay inside the project until published content references them.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use ypsl_core::error::CoreError;
use ypsl_core::policy;
use ypsl_core::principal::Project;
use ypsl_core::stamp::stamp_project;
use ypsl_core::types::DbId;
use ypsl_db::models::author::{Author, CreateAuthor, UpdateAuthor};
use ypsl_db::repositories::AuthorRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::{AuthUser, MaybeUser};
use crate::state::AppState;

fn parse_project(code: &str) -> AppResult<Project> {
    Project::parse(code)
        .ok_or_else(|| AppError::Core(CoreError::Validation(format!("Unknown project: {code}"))))
}

/// POST /api/v1/authors
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateAuthor>,
) -> AppResult<(StatusCode, Json<Author>)> {
    let principal = Some(&user.principal);
    if policy::project_scoped_write(principal).is_deny() {
        return Err(AppError::Core(CoreError::Forbidden(
            "Not allowed to create authors".into(),
        )));
    }

    let requested = match &input.project {
        Some(code) => Some(parse_project(code)?),
        None => None,
    };
    let project = stamp_project(principal, requested).map(|p| p.as_str().to_string());

    let author = AuthorRepo::create(&state.pool, &input, project.as_deref()).await?;
    Ok((StatusCode::CREATED, Json(author)))
}

/// GET /api/v1/authors
pub async fn list(State(state): State<AppState>, user: MaybeUser) -> AppResult<Json<Vec<Author>>> {
    let access = policy::project_read_or_public(user.principal());
    let authors = AuthorRepo::list(&state.pool, &access).await?;
    Ok(Json(authors))
}

/// GET /api/v1/authors/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    user: MaybeUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Author>> {
    let access = policy::project_read_or_public(user.principal());
    let author = AuthorRepo::find_by_id(&state.pool, id, &access)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Author",
            id,
        }))?;
    Ok(Json(author))
}

/// PUT /api/v1/authors/{id}
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAuthor>,
) -> AppResult<Json<Author>> {
    let principal = Some(&user.principal);
    let access = policy::project_scoped_write(principal);

    let project = match &input.project {
        Some(code) => {
            let requested = parse_project(code)?;
            stamp_project(principal, Some(requested)).map(|p| p.as_str().to_string())
        }
        None => None,
    };

    let author = AuthorRepo::update(&state.pool, id, &input, project.as_deref(), &access)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Author",
            id,
        }))?;

    Ok(Json(author))
}

/// DELETE /api/v1/authors/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let access = policy::project_scoped_write(Some(&user.principal));
    let deleted = AuthorRepo::delete(&state.pool, id, &access).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Author",
            id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}
