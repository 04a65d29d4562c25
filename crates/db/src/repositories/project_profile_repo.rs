//! Repository for the `project_profiles` table.

use sqlx::PgPool;
use ypsl_core::types::DbId;

use crate::models::project_profile::{
    CreateProjectProfile, ProjectProfile, UpdateProjectProfile,
};

const COLUMNS: &str = "id, name, description, logo_id, link, created_at, updated_at";

/// Provides CRUD operations for public project profiles.
pub struct ProjectProfileRepo;

impl ProjectProfileRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateProjectProfile,
    ) -> Result<ProjectProfile, sqlx::Error> {
        let query = format!(
            "INSERT INTO project_profiles (name, description, logo_id, link)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectProfile>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.logo_id)
            .bind(&input.link)
            .fetch_one(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<ProjectProfile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM project_profiles ORDER BY name ASC");
        sqlx::query_as::<_, ProjectProfile>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ProjectProfile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM project_profiles WHERE id = $1");
        sqlx::query_as::<_, ProjectProfile>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProjectProfile,
    ) -> Result<Option<ProjectProfile>, sqlx::Error> {
        let query = format!(
            "UPDATE project_profiles SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                logo_id = COALESCE($4, logo_id),
                link = COALESCE($5, link),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectProfile>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.logo_id)
            .bind(&input.link)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM project_profiles WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
