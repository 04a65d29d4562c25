//! Handlers for the `/merch-categories` resource.
//!
//! Categories group products for storefront filtering. Reads are public;
//! writes are reserved for site admins, like the products themselves.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use ypsl_core::error::CoreError;
use ypsl_core::policy;
use ypsl_core::slug::{format_slug, resolve_slug};
use ypsl_core::types::DbId;
use ypsl_db::models::merch_category::{CreateMerchCategory, MerchCategory, UpdateMerchCategory};
use ypsl_db::repositories::MerchCategoryRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

fn require_admin(user: &AuthUser) -> AppResult<()> {
    if policy::admin_only(Some(&user.principal)).is_deny() {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only admins may manage merch categories".into(),
        )));
    }
    Ok(())
}

/// POST /api/v1/merch-categories
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateMerchCategory>,
) -> AppResult<(StatusCode, Json<MerchCategory>)> {
    require_admin(&user)?;
    let slug = resolve_slug(&input.name, input.slug.as_deref());
    let category = MerchCategoryRepo::create(&state.pool, &input, &slug).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// GET /api/v1/merch-categories
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<MerchCategory>>> {
    let categories = MerchCategoryRepo::list(&state.pool).await?;
    Ok(Json(categories))
}

/// GET /api/v1/merch-categories/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MerchCategory>> {
    let category = MerchCategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "MerchCategory",
            id,
        }))?;
    Ok(Json(category))
}

/// PUT /api/v1/merch-categories/{id}
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMerchCategory>,
) -> AppResult<Json<MerchCategory>> {
    require_admin(&user)?;
    let slug = input.slug.as_deref().map(format_slug);
    let category = MerchCategoryRepo::update(&state.pool, id, &input, slug.as_deref())
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "MerchCategory",
            id,
        }))?;
    Ok(Json(category))
}

/// DELETE /api/v1/merch-categories/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    require_admin(&user)?;
    let deleted = MerchCategoryRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "MerchCategory",
            id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}
