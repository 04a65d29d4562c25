//! Repositories for the `committees` and `sub_committees` tables.
//!
//! Publicly readable, globally administered; the handler gates writes
//! with the unconditional admin policy, so these queries carry no scoping
//! predicate.

use sqlx::PgPool;
use ypsl_core::types::DbId;

use crate::models::committee::{
    Committee, CreateCommittee, CreateSubCommitteeMember, SubCommitteeMember, UpdateCommittee,
    UpdateSubCommitteeMember,
};

const COLUMNS: &str = "id, year, theme, created_at, updated_at";

/// Provides CRUD operations for committee years.
pub struct CommitteeRepo;

impl CommitteeRepo {
    pub async fn create(pool: &PgPool, input: &CreateCommittee) -> Result<Committee, sqlx::Error> {
        let query = format!(
            "INSERT INTO committees (year, theme) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Committee>(&query)
            .bind(&input.year)
            .bind(&input.theme)
            .fetch_one(pool)
            .await
    }

    /// List committee years, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Committee>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM committees ORDER BY year DESC");
        sqlx::query_as::<_, Committee>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Committee>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM committees WHERE id = $1");
        sqlx::query_as::<_, Committee>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCommittee,
    ) -> Result<Option<Committee>, sqlx::Error> {
        let query = format!(
            "UPDATE committees SET
                year = COALESCE($2, year),
                theme = COALESCE($3, theme),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Committee>(&query)
            .bind(id)
            .bind(&input.year)
            .bind(&input.theme)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM committees WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

const MEMBER_COLUMNS: &str = "id, committee_id, first_name, last_name, full_name, position, \
     photo_id, created_at, updated_at";

/// Provides CRUD operations for sub-committee members.
pub struct SubCommitteeRepo;

impl SubCommitteeRepo {
    /// Insert a member. `full_name` carries the derived display name.
    pub async fn create(
        pool: &PgPool,
        input: &CreateSubCommitteeMember,
        full_name: &str,
    ) -> Result<SubCommitteeMember, sqlx::Error> {
        let query = format!(
            "INSERT INTO sub_committees (committee_id, first_name, last_name, full_name,
                position, photo_id)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {MEMBER_COLUMNS}"
        );
        sqlx::query_as::<_, SubCommitteeMember>(&query)
            .bind(input.committee_id)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(full_name)
            .bind(&input.position)
            .bind(input.photo_id)
            .fetch_one(pool)
            .await
    }

    /// List members, optionally restricted to one committee year.
    pub async fn list(
        pool: &PgPool,
        committee_id: Option<DbId>,
    ) -> Result<Vec<SubCommitteeMember>, sqlx::Error> {
        match committee_id {
            Some(committee_id) => {
                let query = format!(
                    "SELECT {MEMBER_COLUMNS} FROM sub_committees
                     WHERE committee_id = $1 ORDER BY full_name ASC"
                );
                sqlx::query_as::<_, SubCommitteeMember>(&query)
                    .bind(committee_id)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!(
                    "SELECT {MEMBER_COLUMNS} FROM sub_committees ORDER BY full_name ASC"
                );
                sqlx::query_as::<_, SubCommitteeMember>(&query)
                    .fetch_all(pool)
                    .await
            }
        }
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<SubCommitteeMember>, sqlx::Error> {
        let query = format!("SELECT {MEMBER_COLUMNS} FROM sub_committees WHERE id = $1");
        sqlx::query_as::<_, SubCommitteeMember>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update a member. `full_name` is re-derived by the handler whenever
    /// either name part changes.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSubCommitteeMember,
        full_name: Option<&str>,
    ) -> Result<Option<SubCommitteeMember>, sqlx::Error> {
        let query = format!(
            "UPDATE sub_committees SET
                committee_id = COALESCE($2, committee_id),
                first_name = COALESCE($3, first_name),
                last_name = COALESCE($4, last_name),
                full_name = COALESCE($5, full_name),
                position = COALESCE($6, position),
                photo_id = COALESCE($7, photo_id),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {MEMBER_COLUMNS}"
        );
        sqlx::query_as::<_, SubCommitteeMember>(&query)
            .bind(id)
            .bind(input.committee_id)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(full_name)
            .bind(&input.position)
            .bind(input.photo_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sub_committees WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
