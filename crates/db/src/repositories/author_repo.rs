//! Repository for the `authors` table. Access-scoped for project staff.

use sqlx::{PgPool, QueryBuilder};
use ypsl_core::policy::Access;
use ypsl_core::types::DbId;

use crate::models::author::{Author, CreateAuthor, UpdateAuthor};
use crate::sql::{self, push_coalesce};

const COLUMNS: &str = "id, name, project, bio, avatar_id, created_at, updated_at";

/// Provides access-scoped CRUD operations for authors.
pub struct AuthorRepo;

impl AuthorRepo {
    /// Insert a new author. `project` carries the stamped value.
    pub async fn create(
        pool: &PgPool,
        input: &CreateAuthor,
        project: Option<&str>,
    ) -> Result<Author, sqlx::Error> {
        let query = format!(
            "INSERT INTO authors (name, project, bio, avatar_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Author>(&query)
            .bind(&input.name)
            .bind(project)
            .bind(&input.bio)
            .bind(input.avatar_id)
            .fetch_one(pool)
            .await
    }

    /// List authors visible under `access`, alphabetically.
    pub async fn list(pool: &PgPool, access: &Access) -> Result<Vec<Author>, sqlx::Error> {
        if access.is_deny() {
            return Ok(vec![]);
        }
        let mut qb = QueryBuilder::new(format!("SELECT {COLUMNS} FROM authors WHERE TRUE"));
        sql::push_access(&mut qb, access);
        qb.push(" ORDER BY name ASC");
        qb.build_query_as::<Author>().fetch_all(pool).await
    }

    /// Find an author by id if `access` reaches it.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
        access: &Access,
    ) -> Result<Option<Author>, sqlx::Error> {
        if access.is_deny() {
            return Ok(None);
        }
        let mut qb = QueryBuilder::new(format!("SELECT {COLUMNS} FROM authors WHERE id = "));
        qb.push_bind(id);
        sql::push_access(&mut qb, access);
        qb.build_query_as::<Author>().fetch_optional(pool).await
    }

    /// Update an author; rows outside the caller's scope come back as `None`.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAuthor,
        project: Option<&str>,
        access: &Access,
    ) -> Result<Option<Author>, sqlx::Error> {
        if access.is_deny() {
            return Ok(None);
        }
        let mut qb = QueryBuilder::new("UPDATE authors SET updated_at = NOW()");
        push_coalesce(&mut qb, "name", input.name.clone());
        push_coalesce(&mut qb, "project", project.map(str::to_string));
        push_coalesce(&mut qb, "bio", input.bio.clone());
        push_coalesce(&mut qb, "avatar_id", input.avatar_id);
        qb.push(" WHERE id = ");
        qb.push_bind(id);
        sql::push_access(&mut qb, access);
        qb.push(format!(" RETURNING {COLUMNS}"));
        qb.build_query_as::<Author>().fetch_optional(pool).await
    }

    /// Delete an author. Returns `true` iff a row within scope was removed.
    pub async fn delete(pool: &PgPool, id: DbId, access: &Access) -> Result<bool, sqlx::Error> {
        if access.is_deny() {
            return Ok(false);
        }
        let mut qb = QueryBuilder::new("DELETE FROM authors WHERE id = ");
        qb.push_bind(id);
        sql::push_access(&mut qb, access);
        let result = qb.build().execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }
}
