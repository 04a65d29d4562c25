//! Handlers for the `/faqs` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use ypsl_core::error::CoreError;
use ypsl_core::policy;
use ypsl_core::types::DbId;
use ypsl_db::models::faq::{CreateFaq, Faq, UpdateFaq};
use ypsl_db::repositories::FaqRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

fn require_admin(user: &AuthUser) -> AppResult<()> {
    if policy::admin_only(Some(&user.principal)).is_deny() {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only admins may manage FAQs".into(),
        )));
    }
    Ok(())
}

/// POST /api/v1/faqs
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateFaq>,
) -> AppResult<(StatusCode, Json<Faq>)> {
    require_admin(&user)?;
    let faq = FaqRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(faq)))
}

/// GET /api/v1/faqs
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Faq>>> {
    let faqs = FaqRepo::list(&state.pool).await?;
    Ok(Json(faqs))
}

/// GET /api/v1/faqs/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Faq>> {
    let faq = FaqRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Faq", id }))?;
    Ok(Json(faq))
}

/// PUT /api/v1/faqs/{id}
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateFaq>,
) -> AppResult<Json<Faq>> {
    require_admin(&user)?;
    let faq = FaqRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Faq", id }))?;
    Ok(Json(faq))
}

/// DELETE /api/v1/faqs/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    require_admin(&user)?;
    let deleted = FaqRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Faq", id }));
    }
    Ok(StatusCode::NO_CONTENT)
}
