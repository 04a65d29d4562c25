//! Handlers for the `/events` resource.
//!
//! Reads are public but scoped: anonymous visitors and plain authenticated
//! accounts only see published rows, project staff additionally see every
//! row of their own project, global staff see everything. Writes are
//! stamped so a project-scoped principal can only ever produce rows inside
//! their own partition.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use ypsl_core::error::CoreError;
use ypsl_core::policy;
use ypsl_core::principal::Project;
use ypsl_core::slug::resolve_slug;
use ypsl_core::stamp::stamp_project;
use ypsl_core::types::DbId;
use ypsl_db::models::event::{CreateEvent, Event, UpdateEvent};
use ypsl_db::repositories::EventRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::{AuthUser, MaybeUser};
use crate::state::AppState;

/// POST /api/v1/events
///
/// The stored project is the stamped one, not necessarily the requested
/// one; the slug is derived from the title when absent.
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateEvent>,
) -> AppResult<(StatusCode, Json<Event>)> {
    let principal = Some(&user.principal);
    if policy::project_scoped_write(principal).is_deny() {
        return Err(AppError::Core(CoreError::Forbidden(
            "Not allowed to create events".into(),
        )));
    }

    let requested = match &input.project {
        Some(code) => Some(Project::parse(code).ok_or_else(|| {
            AppError::Core(CoreError::Validation(format!("Unknown project: {code}")))
        })?),
        None => None,
    };
    let project = stamp_project(principal, requested).ok_or_else(|| {
        AppError::Core(CoreError::Validation("Events require a project".into()))
    })?;

    let slug = resolve_slug(&input.title, input.slug.as_deref());
    let event = EventRepo::create(&state.pool, &input, &slug, project.as_str()).await?;

    tracing::info!(event_id = event.id, project = %event.project, "Event created");
    Ok((StatusCode::CREATED, Json(event)))
}

/// GET /api/v1/events
pub async fn list(State(state): State<AppState>, user: MaybeUser) -> AppResult<Json<Vec<Event>>> {
    let access = policy::project_read_or_published(user.principal());
    let events = EventRepo::list(&state.pool, &access).await?;
    Ok(Json(events))
}

/// GET /api/v1/events/{id}
///
/// A draft outside the caller's scope surfaces as 404.
pub async fn get_by_id(
    State(state): State<AppState>,
    user: MaybeUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Event>> {
    let access = policy::project_read_or_published(user.principal());
    let event = EventRepo::find_by_id(&state.pool, id, &access)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Event",
            id,
        }))?;
    Ok(Json(event))
}

/// GET /api/v1/events/slug/{slug}
pub async fn get_by_slug(
    State(state): State<AppState>,
    user: MaybeUser,
    Path(slug): Path<String>,
) -> AppResult<Json<Event>> {
    let access = policy::project_read_or_published(user.principal());
    let event = EventRepo::find_by_slug(&state.pool, &slug, &access)
        .await?
        .ok_or(AppError::Database(sqlx::Error::RowNotFound))?;
    Ok(Json(event))
}

/// PUT /api/v1/events/{id}
///
/// The write scope rides in the SQL statement: a project manager editing
/// another project's event updates zero rows and gets 404.
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEvent>,
) -> AppResult<Json<Event>> {
    let principal = Some(&user.principal);
    let access = policy::project_scoped_write(principal);

    // A project change in the payload goes through the same stamp as
    // creation so staff cannot move rows out of their partition.
    let project = match &input.project {
        Some(code) => {
            let requested = Project::parse(code).ok_or_else(|| {
                AppError::Core(CoreError::Validation(format!("Unknown project: {code}")))
            })?;
            stamp_project(principal, Some(requested)).map(|p| p.as_str().to_string())
        }
        None => None,
    };
    let slug = input.slug.as_deref().map(ypsl_core::slug::format_slug);

    let event = EventRepo::update(
        &state.pool,
        id,
        &input,
        slug.as_deref(),
        project.as_deref(),
        &access,
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound {
        entity: "Event",
        id,
    }))?;

    Ok(Json(event))
}

/// DELETE /api/v1/events/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let access = policy::project_scoped_write(Some(&user.principal));
    let deleted = EventRepo::delete(&state.pool, id, &access).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Event",
            id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}
