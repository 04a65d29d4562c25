//! Repository for the `organizers` table.

use sqlx::PgPool;
use ypsl_core::types::DbId;

use crate::models::organizer::{CreateOrganizer, Organizer, UpdateOrganizer};

const COLUMNS: &str = "id, name, logo_id, created_at, updated_at";

/// Provides CRUD operations for event organizers.
pub struct OrganizerRepo;

impl OrganizerRepo {
    pub async fn create(pool: &PgPool, input: &CreateOrganizer) -> Result<Organizer, sqlx::Error> {
        let query = format!(
            "INSERT INTO organizers (name, logo_id) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Organizer>(&query)
            .bind(&input.name)
            .bind(input.logo_id)
            .fetch_one(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Organizer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM organizers ORDER BY name ASC");
        sqlx::query_as::<_, Organizer>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Organizer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM organizers WHERE id = $1");
        sqlx::query_as::<_, Organizer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateOrganizer,
    ) -> Result<Option<Organizer>, sqlx::Error> {
        let query = format!(
            "UPDATE organizers SET
                name = COALESCE($2, name),
                logo_id = COALESCE($3, logo_id),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Organizer>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.logo_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM organizers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
