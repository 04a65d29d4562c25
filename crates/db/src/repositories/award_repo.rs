//! Repository for the `awards` table.

use sqlx::PgPool;
use ypsl_core::types::DbId;

use crate::models::award::{Award, CreateAward, UpdateAward};

const COLUMNS: &str =
    "id, award_name, award_category, award_image_id, year, created_at, updated_at";

/// Provides CRUD operations for awards.
pub struct AwardRepo;

impl AwardRepo {
    pub async fn create(pool: &PgPool, input: &CreateAward) -> Result<Award, sqlx::Error> {
        let query = format!(
            "INSERT INTO awards (award_name, award_category, award_image_id, year)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Award>(&query)
            .bind(&input.award_name)
            .bind(&input.award_category)
            .bind(input.award_image_id)
            .bind(&input.year)
            .fetch_one(pool)
            .await
    }

    /// List awards, newest year first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Award>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM awards ORDER BY year DESC NULLS LAST, award_name ASC"
        );
        sqlx::query_as::<_, Award>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Award>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM awards WHERE id = $1");
        sqlx::query_as::<_, Award>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAward,
    ) -> Result<Option<Award>, sqlx::Error> {
        let query = format!(
            "UPDATE awards SET
                award_name = COALESCE($2, award_name),
                award_category = COALESCE($3, award_category),
                award_image_id = COALESCE($4, award_image_id),
                year = COALESCE($5, year),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Award>(&query)
            .bind(id)
            .bind(&input.award_name)
            .bind(&input.award_category)
            .bind(input.award_image_id)
            .bind(&input.year)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM awards WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
