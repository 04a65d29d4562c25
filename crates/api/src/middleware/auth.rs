//! JWT-based authentication extractors for Axum handlers.
//!
//! Two extractors cover the two kinds of routes:
//!
//! - [`AuthUser`] rejects the request with 401 unless a valid Bearer
//!   token is present. Use it on management routes.
//! - [`MaybeUser`] never rejects; it yields `Some(principal)` for a valid
//!   token and `None` otherwise. Use it on public read routes whose
//!   visibility widens for signed-in staff.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use ypsl_core::error::CoreError;
use ypsl_core::principal::Principal;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated principal extracted from a JWT Bearer token in the
/// `Authorization` header.
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = user.principal.id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The typed actor built from the token claims.
    pub principal: Principal,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = validate_token(token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        let principal = claims.principal().ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Token carries an unknown role or project".into(),
            ))
        })?;

        Ok(AuthUser { principal })
    }
}

/// Optional principal for routes that serve both the public and staff.
///
/// A malformed or expired token is treated the same as no token at all,
/// so a stale session degrades to the public view instead of erroring.
#[derive(Debug, Clone)]
pub struct MaybeUser(pub Option<Principal>);

impl MaybeUser {
    /// Borrow the principal in the `Option<&Principal>` shape the policy
    /// functions take.
    pub fn principal(&self) -> Option<&Principal> {
        self.0.as_ref()
    }
}

impl FromRequestParts<AppState> for MaybeUser {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let principal = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .and_then(|h| h.strip_prefix("Bearer "))
            .and_then(|token| validate_token(token, &state.config.jwt).ok())
            .and_then(|claims| claims.principal());

        Ok(MaybeUser(principal))
    }
}
