//! Handlers for the `/auth` resource (login, current principal).

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use ypsl_core::error::CoreError;
use ypsl_core::principal::{Principal, Project, Role};
use ypsl_core::types::DbId;
use ypsl_db::models::user::User;
use ypsl_db::repositories::UserRepo;

use crate::auth::jwt::generate_access_token;
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful authentication response.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserInfo,
}

/// Public user info embedded in [`AuthResponse`] and returned by `/auth/me`.
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub role: String,
    pub project: Option<String>,
}

impl From<&User> for UserInfo {
    fn from(user: &User) -> Self {
        UserInfo {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role.clone(),
            project: user.project.clone(),
        }
    }
}

/// Build a typed [`Principal`] from a stored user row.
///
/// The role and project columns are CHECK-constrained, so a parse failure
/// here means the constraint list and the enum have drifted apart.
pub fn principal_from_user(user: &User) -> AppResult<Principal> {
    let role = Role::parse(&user.role).ok_or_else(|| {
        AppError::InternalError(format!("User {} has unknown role {:?}", user.id, user.role))
    })?;
    let project = match &user.project {
        Some(code) => Some(Project::parse(code).ok_or_else(|| {
            AppError::InternalError(format!("User {} has unknown project {code:?}", user.id))
        })?),
        None => None,
    };
    Ok(Principal {
        id: user.id,
        role,
        project,
    })
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/login
///
/// Authenticate with email + password. Returns an access token.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let user = UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Invalid email or password".into()))
        })?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid email or password".into(),
        )));
    }

    UserRepo::record_login(&state.pool, user.id).await?;

    let principal = principal_from_user(&user)?;
    let access_token = generate_access_token(&principal, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(user_id = user.id, role = %user.role, "User logged in");

    Ok(Json(AuthResponse {
        access_token,
        expires_in: state.config.jwt.access_token_expiry_mins * 60,
        user: UserInfo::from(&user),
    }))
}

/// GET /api/v1/auth/me
///
/// Return the account behind the presented token.
pub async fn me(State(state): State<AppState>, user: AuthUser) -> AppResult<Json<UserInfo>> {
    let id = user.principal.id;
    let row = UserRepo::find_by_id_unscoped(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;
    Ok(Json(UserInfo::from(&row)))
}
