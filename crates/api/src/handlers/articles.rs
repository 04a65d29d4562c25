//! Handlers for the `/articles` resource.
//!
//! Same access shape as events, except an article may be left without a
//! project (a chapter-wide post) when written by global staff.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use ypsl_core::error::CoreError;
use ypsl_core::policy;
use ypsl_core::principal::Project;
use ypsl_core::slug::{format_slug, resolve_slug};
use ypsl_core::stamp::stamp_project;
use ypsl_core::types::DbId;
use ypsl_db::models::article::{Article, CreateArticle, UpdateArticle};
use ypsl_db::repositories::ArticleRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::{AuthUser, MaybeUser};
use crate::state::AppState;

fn parse_project(code: &str) -> AppResult<Project> {
    Project::parse(code)
        .ok_or_else(|| AppError::Core(CoreError::Validation(format!("Unknown project: {code}"))))
}

/// POST /api/v1/articles
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateArticle>,
) -> AppResult<(StatusCode, Json<Article>)> {
    let principal = Some(&user.principal);
    if policy::project_scoped_write(principal).is_deny() {
        return Err(AppError::Core(CoreError::Forbidden(
            "Not allowed to create articles".into(),
        )));
    }

    let requested = match &input.project {
        Some(code) => Some(parse_project(code)?),
        None => None,
    };
    let project = stamp_project(principal, requested).map(|p| p.as_str().to_string());

    let slug = resolve_slug(&input.title, input.slug.as_deref());
    let article = ArticleRepo::create(&state.pool, &input, &slug, project.as_deref()).await?;

    tracing::info!(article_id = article.id, "Article created");
    Ok((StatusCode::CREATED, Json(article)))
}

/// GET /api/v1/articles
pub async fn list(
    State(state): State<AppState>,
    user: MaybeUser,
) -> AppResult<Json<Vec<Article>>> {
    let access = policy::project_read_or_published(user.principal());
    let articles = ArticleRepo::list(&state.pool, &access).await?;
    Ok(Json(articles))
}

/// GET /api/v1/articles/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    user: MaybeUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Article>> {
    let access = policy::project_read_or_published(user.principal());
    let article = ArticleRepo::find_by_id(&state.pool, id, &access)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Article",
            id,
        }))?;
    Ok(Json(article))
}

/// GET /api/v1/articles/slug/{slug}
pub async fn get_by_slug(
    State(state): State<AppState>,
    user: MaybeUser,
    Path(slug): Path<String>,
) -> AppResult<Json<Article>> {
    let access = policy::project_read_or_published(user.principal());
    let article = ArticleRepo::find_by_slug(&state.pool, &slug, &access)
        .await?
        .ok_or(AppError::Database(sqlx::Error::RowNotFound))?;
    Ok(Json(article))
}

/// PUT /api/v1/articles/{id}
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateArticle>,
) -> AppResult<Json<Article>> {
    let principal = Some(&user.principal);
    let access = policy::project_scoped_write(principal);

    let project = match &input.project {
        Some(code) => {
            let requested = parse_project(code)?;
            stamp_project(principal, Some(requested)).map(|p| p.as_str().to_string())
        }
        None => None,
    };
    let slug = input.slug.as_deref().map(format_slug);

    let article = ArticleRepo::update(
        &state.pool,
        id,
        &input,
        slug.as_deref(),
        project.as_deref(),
        &access,
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound {
        entity: "Article",
        id,
    }))?;

    Ok(Json(article))
}

/// DELETE /api/v1/articles/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let access = policy::project_scoped_write(Some(&user.principal));
    let deleted = ArticleRepo::delete(&state.pool, id, &access).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Article",
            id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}
