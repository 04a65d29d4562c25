//! Repository for the `executive_committees` table.

use sqlx::PgPool;
use ypsl_core::types::DbId;

use crate::models::executive_committee::{
    CreateExecutiveCommitteeMember, ExecutiveCommitteeMember, UpdateExecutiveCommitteeMember,
};

const COLUMNS: &str =
    "id, year, first_name, last_name, position, photo_id, ordering, created_at, updated_at";

/// Provides CRUD operations for executive committee members.
pub struct ExecutiveCommitteeRepo;

impl ExecutiveCommitteeRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateExecutiveCommitteeMember,
    ) -> Result<ExecutiveCommitteeMember, sqlx::Error> {
        let query = format!(
            "INSERT INTO executive_committees (year, first_name, last_name, position, photo_id,
                ordering)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ExecutiveCommitteeMember>(&query)
            .bind(&input.year)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.position)
            .bind(input.photo_id)
            .bind(input.ordering)
            .fetch_one(pool)
            .await
    }

    /// List members, optionally restricted to one year, in display order.
    pub async fn list(
        pool: &PgPool,
        year: Option<&str>,
    ) -> Result<Vec<ExecutiveCommitteeMember>, sqlx::Error> {
        match year {
            Some(year) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM executive_committees
                     WHERE year = $1 ORDER BY ordering ASC, id ASC"
                );
                sqlx::query_as::<_, ExecutiveCommitteeMember>(&query)
                    .bind(year)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!(
                    "SELECT {COLUMNS} FROM executive_committees
                     ORDER BY year DESC, ordering ASC, id ASC"
                );
                sqlx::query_as::<_, ExecutiveCommitteeMember>(&query)
                    .fetch_all(pool)
                    .await
            }
        }
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ExecutiveCommitteeMember>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM executive_committees WHERE id = $1");
        sqlx::query_as::<_, ExecutiveCommitteeMember>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateExecutiveCommitteeMember,
    ) -> Result<Option<ExecutiveCommitteeMember>, sqlx::Error> {
        let query = format!(
            "UPDATE executive_committees SET
                year = COALESCE($2, year),
                first_name = COALESCE($3, first_name),
                last_name = COALESCE($4, last_name),
                position = COALESCE($5, position),
                photo_id = COALESCE($6, photo_id),
                ordering = COALESCE($7, ordering),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ExecutiveCommitteeMember>(&query)
            .bind(id)
            .bind(&input.year)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.position)
            .bind(input.photo_id)
            .bind(input.ordering)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM executive_committees WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
