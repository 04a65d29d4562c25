//! Handlers for the `/users` resource.
//!
//! Visibility is row-scoped by the users policy: global staff see every
//! account, a project admin sees themselves plus their project's managers,
//! and everyone else only themselves. Privilege-relevant fields on writes
//! are clamped, never rejected: a project admin asking for an admin
//! account gets a project manager in their own project instead.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use validator::Validate;
use ypsl_core::error::CoreError;
use ypsl_core::policy;
use ypsl_core::principal::{is_admin, Project, Role};
use ypsl_core::stamp::clamp_user_role;
use ypsl_core::types::DbId;
use ypsl_db::models::user::{CreateUser, UpdateUser, User};
use ypsl_db::repositories::UserRepo;

use crate::auth::password::{hash_password, validate_password_strength};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::notifications::user_emails;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /users`. The password arrives in plaintext and
/// never reaches the repository unhashed.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub password: String,
    pub role: String,
    pub project: Option<String>,
}

fn parse_role(value: &str) -> AppResult<Role> {
    Role::parse(value)
        .ok_or_else(|| AppError::Core(CoreError::Validation(format!("Unknown role: {value}"))))
}

fn parse_project(value: &str) -> AppResult<Project> {
    Project::parse(value)
        .ok_or_else(|| AppError::Core(CoreError::Validation(format!("Unknown project: {value}"))))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/users
///
/// Admins and managers may create any account; a project admin may only
/// mint project managers for their own project (requested role/project
/// are silently coerced). Everyone else gets 403.
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<User>)> {
    let principal = &user.principal;
    if policy::users_create(Some(principal)).is_deny() {
        return Err(AppError::Core(CoreError::Forbidden(
            "Not allowed to create users".into(),
        )));
    }

    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;
    validate_password_strength(&input.password)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let requested_role = parse_role(&input.role)?;
    let requested_project = match &input.project {
        Some(code) => Some(parse_project(code)?),
        None => None,
    };

    let (role, project) = clamp_user_role(Some(principal), requested_role, requested_project);
    if matches!(role, Role::ProjectAdmin | Role::ProjectManager) && project.is_none() {
        return Err(AppError::Core(CoreError::Validation(
            "Project-scoped roles require a project".into(),
        )));
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let created = UserRepo::create(
        &state.pool,
        &CreateUser {
            name: input.name,
            email: input.email,
            password_hash,
            role: role.as_str().to_string(),
            project: project.map(|p| p.as_str().to_string()),
        },
    )
    .await?;

    tracing::info!(
        user_id = created.id,
        role = %created.role,
        created_by = principal.id,
        "User account created"
    );

    // Welcome email is best-effort: a delivery failure must not fail the
    // account creation that already committed.
    if let Some(email) = &state.email {
        let html = user_emails::welcome_html(&created.name, &created.email);
        if let Err(e) = email
            .send(&created.email, "Welcome to IEEE YPSL", &html)
            .await
        {
            tracing::error!(error = %e, user_id = created.id, "Failed to send welcome email");
        }
    }

    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/v1/users
pub async fn list(State(state): State<AppState>, user: AuthUser) -> AppResult<Json<Vec<User>>> {
    let access = policy::users_access(Some(&user.principal));
    let users = UserRepo::list(&state.pool, &access).await?;
    Ok(Json(users))
}

/// GET /api/v1/users/{id}
///
/// Accounts outside the caller's scope surface as 404, not 403.
pub async fn get_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<User>> {
    let access = policy::users_access(Some(&user.principal));
    let row = UserRepo::find_by_id(&state.pool, id, &access)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;
    Ok(Json(row))
}

/// PUT /api/v1/users/{id}
///
/// Role/project changes by a project admin are coerced to project manager
/// in their own project, mirroring the create path.
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateUser>,
) -> AppResult<Json<User>> {
    let principal = &user.principal;
    let access = policy::users_access(Some(principal));

    let (role, project) = if input.role.is_some() || input.project.is_some() {
        let requested_role = match &input.role {
            Some(value) => Some(parse_role(value)?),
            None => None,
        };
        let requested_project = match &input.project {
            Some(code) => Some(parse_project(code)?),
            None => None,
        };
        if is_admin(Some(principal)) {
            (
                requested_role.map(|r| r.as_str().to_string()),
                requested_project.map(|p| p.as_str().to_string()),
            )
        } else if principal.role == Role::ProjectAdmin {
            // Whatever was asked for becomes a project manager in the
            // admin's own project.
            let (role, project) = clamp_user_role(
                Some(principal),
                requested_role.unwrap_or(Role::ProjectManager),
                requested_project,
            );
            (
                Some(role.as_str().to_string()),
                project.map(|p| p.as_str().to_string()),
            )
        } else {
            // A manager editing their own profile cannot touch role or
            // project at all.
            (None, None)
        }
    } else {
        (None, None)
    };

    let updated = UserRepo::update(
        &state.pool,
        id,
        &input,
        role.as_deref(),
        project.as_deref(),
        &access,
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;

    Ok(Json(updated))
}

/// DELETE /api/v1/users/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let access = policy::users_access(Some(&user.principal));
    let deleted = UserRepo::delete(&state.pool, id, &access).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "User", id }));
    }
    Ok(StatusCode::NO_CONTENT)
}
