//! Repository for the `users` table.
//!
//! Row-level visibility follows the users policy: global staff see
//! everyone, a project admin sees themselves plus their project's
//! managers, everyone else only themselves.

use sqlx::{PgPool, QueryBuilder};
use ypsl_core::policy::Access;
use ypsl_core::types::DbId;

use crate::models::user::{CreateUser, UpdateUser, User};
use crate::sql::{self, push_coalesce};

const COLUMNS: &str =
    "id, name, email, password_hash, role, project, last_login_at, created_at, updated_at";

/// Provides access-scoped CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user. The caller has already hashed the password and
    /// clamped role/project.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (name, email, password_hash, role, project)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(&input.role)
            .bind(&input.project)
            .fetch_one(pool)
            .await
    }

    /// Find a user by email. Unscoped: used by the login path before any
    /// principal exists.
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by id. Unscoped: used to rebuild the principal from a
    /// validated token.
    pub async fn find_by_id_unscoped(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List users visible under `access`, alphabetically.
    pub async fn list(pool: &PgPool, access: &Access) -> Result<Vec<User>, sqlx::Error> {
        if access.is_deny() {
            return Ok(vec![]);
        }
        let mut qb = QueryBuilder::new(format!("SELECT {COLUMNS} FROM users WHERE TRUE"));
        sql::push_access(&mut qb, access);
        qb.push(" ORDER BY name ASC");
        qb.build_query_as::<User>().fetch_all(pool).await
    }

    /// Find a user by id if `access` reaches them.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
        access: &Access,
    ) -> Result<Option<User>, sqlx::Error> {
        if access.is_deny() {
            return Ok(None);
        }
        let mut qb = QueryBuilder::new(format!("SELECT {COLUMNS} FROM users WHERE id = "));
        qb.push_bind(id);
        sql::push_access(&mut qb, access);
        qb.build_query_as::<User>().fetch_optional(pool).await
    }

    /// Update a user. `role`/`project` carry the clamped values; rows
    /// outside the caller's scope come back as `None`.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateUser,
        role: Option<&str>,
        project: Option<&str>,
        access: &Access,
    ) -> Result<Option<User>, sqlx::Error> {
        if access.is_deny() {
            return Ok(None);
        }
        let mut qb = QueryBuilder::new("UPDATE users SET updated_at = NOW()");
        push_coalesce(&mut qb, "name", input.name.clone());
        push_coalesce(&mut qb, "email", input.email.clone());
        push_coalesce(&mut qb, "role", role.map(str::to_string));
        push_coalesce(&mut qb, "project", project.map(str::to_string));
        qb.push(" WHERE id = ");
        qb.push_bind(id);
        sql::push_access(&mut qb, access);
        qb.push(format!(" RETURNING {COLUMNS}"));
        qb.build_query_as::<User>().fetch_optional(pool).await
    }

    /// Delete a user. Returns `true` iff a row within scope was removed.
    pub async fn delete(pool: &PgPool, id: DbId, access: &Access) -> Result<bool, sqlx::Error> {
        if access.is_deny() {
            return Ok(false);
        }
        let mut qb = QueryBuilder::new("DELETE FROM users WHERE id = ");
        qb.push_bind(id);
        sql::push_access(&mut qb, access);
        let result = qb.build().execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }

    /// Stamp `last_login_at` after a successful login.
    pub async fn record_login(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE users SET last_login_at = NOW() WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}
