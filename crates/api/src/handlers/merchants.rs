//! Handlers for the `/merchants` resource (the merchandise catalogue).
//!
//! The storefront reads this anonymously; only global staff curate it.
//! The human-facing `merchant_id` (e.g. `YPSL-HD-001`) is what order
//! submissions reference, so it is unique at the database level.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use ypsl_core::error::CoreError;
use ypsl_core::policy;
use ypsl_core::types::DbId;
use ypsl_db::models::merchant::{CreateMerchant, Merchant, UpdateMerchant};
use ypsl_db::repositories::MerchantRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

fn require_admin(user: &AuthUser) -> AppResult<()> {
    if policy::admin_only(Some(&user.principal)).is_deny() {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only admins may manage merchandise".into(),
        )));
    }
    Ok(())
}

/// POST /api/v1/merchants
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateMerchant>,
) -> AppResult<(StatusCode, Json<Merchant>)> {
    require_admin(&user)?;
    let merchant = MerchantRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(merchant)))
}

/// GET /api/v1/merchants
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Merchant>>> {
    let merchants = MerchantRepo::list(&state.pool).await?;
    Ok(Json(merchants))
}

/// GET /api/v1/merchants/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Merchant>> {
    let merchant = MerchantRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Merchant",
            id,
        }))?;
    Ok(Json(merchant))
}

/// PUT /api/v1/merchants/{id}
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMerchant>,
) -> AppResult<Json<Merchant>> {
    require_admin(&user)?;
    let merchant = MerchantRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Merchant",
            id,
        }))?;
    Ok(Json(merchant))
}

/// DELETE /api/v1/merchants/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    require_admin(&user)?;
    let deleted = MerchantRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Merchant",
            id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}
