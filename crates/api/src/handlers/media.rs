//! Handlers for the `/media` resource.
//!
//! Uploads arrive as multipart/form-data with a `file` part and optional
//! `alt` and `category` fields. The stored category is stamped to the
//! uploader's project for project staff, and the payment-slip category is
//! hidden from public listings by the read policy.

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use ypsl_core::error::CoreError;
use ypsl_core::policy;
use ypsl_core::stamp::{alt_from_filename, stamp_media_category};
use ypsl_core::types::DbId;
use ypsl_db::models::media::{CreateMedia, Media, UpdateMedia, MEDIA_CATEGORIES};
use ypsl_db::repositories::MediaRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::{AuthUser, MaybeUser};
use crate::state::AppState;

/// Category assigned when the uploader names none.
const DEFAULT_CATEGORY: &str = "others";

/// Query parameters for `GET /media`.
#[derive(Debug, Deserialize)]
pub struct ListMediaQuery {
    pub category: Option<String>,
}

fn validate_category(category: &str) -> AppResult<()> {
    if MEDIA_CATEGORIES.contains(&category) {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::Validation(format!(
            "Unknown media category: {category}"
        ))))
    }
}

/// POST /api/v1/media
///
/// Stores the file through the storage provider, then records its
/// metadata. Alt text falls back to a cleaned-up form of the filename.
pub async fn upload(
    State(state): State<AppState>,
    user: AuthUser,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<Media>)> {
    let principal = Some(&user.principal);

    let mut alt: Option<String> = None;
    let mut category: Option<String> = None;
    let mut file: Option<(String, String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart body: {e}")))?
    {
        match field.name().unwrap_or_default() {
            "alt" => {
                alt = Some(field.text().await.map_err(|e| {
                    AppError::BadRequest(format!("Invalid alt field: {e}"))
                })?);
            }
            "category" => {
                category = Some(field.text().await.map_err(|e| {
                    AppError::BadRequest(format!("Invalid category field: {e}"))
                })?);
            }
            "file" => {
                let filename = field.file_name().unwrap_or("upload").to_string();
                let mime_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field.bytes().await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read file: {e}"))
                })?;
                file = Some((filename, mime_type, bytes.to_vec()));
            }
            _ => {}
        }
    }

    let (filename, mime_type, bytes) =
        file.ok_or_else(|| AppError::BadRequest("Missing file part".into()))?;
    if bytes.is_empty() {
        return Err(AppError::BadRequest("Uploaded file is empty".into()));
    }

    let requested = category.unwrap_or_else(|| DEFAULT_CATEGORY.to_string());
    validate_category(&requested)?;
    let category = stamp_media_category(principal, requested);

    let alt = match alt.filter(|a| !a.trim().is_empty()) {
        Some(alt) => alt,
        None => alt_from_filename(&filename),
    };

    let url = state
        .storage
        .store(&filename, &bytes)
        .await
        .map_err(|e| AppError::BadRequest(format!("Could not store file: {e}")))?;

    let media = MediaRepo::create(
        &state.pool,
        &CreateMedia {
            alt,
            category,
            filename,
            mime_type,
            size_bytes: bytes.len() as i64,
            url,
        },
    )
    .await?;

    tracing::info!(media_id = media.id, category = %media.category, "Media uploaded");
    Ok((StatusCode::CREATED, Json(media)))
}

/// GET /api/v1/media
///
/// Payment slips never appear here for anonymous callers; project staff
/// additionally see only their own project's category.
pub async fn list(
    State(state): State<AppState>,
    user: MaybeUser,
    Query(query): Query<ListMediaQuery>,
) -> AppResult<Json<Vec<Media>>> {
    let access = policy::media_read(user.principal());
    let media = MediaRepo::list(&state.pool, query.category.as_deref(), &access).await?;
    Ok(Json(media))
}

/// GET /api/v1/media/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    user: MaybeUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Media>> {
    let access = policy::media_read(user.principal());
    let media = MediaRepo::find_by_id(&state.pool, id, &access)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Media",
            id,
        }))?;
    Ok(Json(media))
}

/// PUT /api/v1/media/{id}
///
/// Metadata only; the stored file is write-once. A category change is
/// stamped the same way an upload is.
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMedia>,
) -> AppResult<Json<Media>> {
    let principal = Some(&user.principal);
    let access = policy::authenticated(principal);

    let category = match &input.category {
        Some(requested) => {
            validate_category(requested)?;
            Some(stamp_media_category(principal, requested.clone()))
        }
        None => None,
    };

    let media = MediaRepo::update(&state.pool, id, &input, category.as_deref(), &access)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Media",
            id,
        }))?;

    Ok(Json(media))
}

/// DELETE /api/v1/media/{id}
///
/// Admin only. Removes the stored file after the row; a failed file
/// removal is logged, not surfaced, since the row is already gone.
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let principal = Some(&user.principal);
    let access = policy::admin_only(principal);
    if access.is_deny() {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only admins may delete media".into(),
        )));
    }

    let media = MediaRepo::find_by_id(&state.pool, id, &access)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Media",
            id,
        }))?;

    let deleted = MediaRepo::delete(&state.pool, id, &access).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Media",
            id,
        }));
    }

    if let Err(e) = state.storage.delete(&media.filename).await {
        tracing::error!(error = %e, media_id = id, "Failed to remove stored file");
    }

    Ok(StatusCode::NO_CONTENT)
}
