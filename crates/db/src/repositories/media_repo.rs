//! Repository for the `media` table.
//!
//! Listing is always access-scoped: even admins never see the payslip
//! category, and project staff only see their own folder.

use sqlx::{PgPool, QueryBuilder};
use ypsl_core::policy::Access;
use ypsl_core::types::DbId;

use crate::models::media::{CreateMedia, Media, UpdateMedia};
use crate::sql::{self, push_coalesce};

const COLUMNS: &str =
    "id, alt, category, filename, mime_type, size_bytes, url, created_at, updated_at";

/// Provides access-scoped operations for media metadata.
pub struct MediaRepo;

impl MediaRepo {
    /// Insert a media row after the file has been stored.
    pub async fn create(pool: &PgPool, input: &CreateMedia) -> Result<Media, sqlx::Error> {
        let query = format!(
            "INSERT INTO media (alt, category, filename, mime_type, size_bytes, url)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Media>(&query)
            .bind(&input.alt)
            .bind(&input.category)
            .bind(&input.filename)
            .bind(&input.mime_type)
            .bind(input.size_bytes)
            .bind(&input.url)
            .fetch_one(pool)
            .await
    }

    /// List media rows visible under `access`, newest first, optionally
    /// restricted to one category folder.
    pub async fn list(
        pool: &PgPool,
        category: Option<&str>,
        access: &Access,
    ) -> Result<Vec<Media>, sqlx::Error> {
        if access.is_deny() {
            return Ok(vec![]);
        }
        let mut qb = QueryBuilder::new(format!("SELECT {COLUMNS} FROM media WHERE TRUE"));
        if let Some(category) = category {
            qb.push(" AND category = ");
            qb.push_bind(category.to_string());
        }
        sql::push_access(&mut qb, access);
        qb.push(" ORDER BY created_at DESC, id DESC");
        qb.build_query_as::<Media>().fetch_all(pool).await
    }

    /// Find a media row by id if `access` reaches it.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
        access: &Access,
    ) -> Result<Option<Media>, sqlx::Error> {
        if access.is_deny() {
            return Ok(None);
        }
        let mut qb = QueryBuilder::new(format!("SELECT {COLUMNS} FROM media WHERE id = "));
        qb.push_bind(id);
        sql::push_access(&mut qb, access);
        qb.build_query_as::<Media>().fetch_optional(pool).await
    }

    /// Update `alt`/`category` metadata; the stored file is write-once.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMedia,
        category: Option<&str>,
        access: &Access,
    ) -> Result<Option<Media>, sqlx::Error> {
        if access.is_deny() {
            return Ok(None);
        }
        let mut qb = QueryBuilder::new("UPDATE media SET updated_at = NOW()");
        push_coalesce(&mut qb, "alt", input.alt.clone());
        push_coalesce(&mut qb, "category", category.map(str::to_string));
        qb.push(" WHERE id = ");
        qb.push_bind(id);
        sql::push_access(&mut qb, access);
        qb.push(format!(" RETURNING {COLUMNS}"));
        qb.build_query_as::<Media>().fetch_optional(pool).await
    }

    /// Delete a media row. Returns `true` iff a row within scope was removed.
    pub async fn delete(pool: &PgPool, id: DbId, access: &Access) -> Result<bool, sqlx::Error> {
        if access.is_deny() {
            return Ok(false);
        }
        let mut qb = QueryBuilder::new("DELETE FROM media WHERE id = ");
        qb.push_bind(id);
        sql::push_access(&mut qb, access);
        let result = qb.build().execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count rows in a category. Used by the order tests to assert that a
    /// rejected upload left no payslip row behind.
    pub async fn count_by_category(pool: &PgPool, category: &str) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM media WHERE category = $1")
            .bind(category)
            .fetch_one(pool)
            .await
    }
}
