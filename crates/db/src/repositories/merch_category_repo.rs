//! Repository for the `merch_categories` table.

use sqlx::PgPool;
use ypsl_core::types::DbId;

use crate::models::merch_category::{CreateMerchCategory, MerchCategory, UpdateMerchCategory};

const COLUMNS: &str = "id, name, slug, created_at, updated_at";

/// Provides CRUD operations for merchandise categories. Slug derivation
/// happens at the API layer; the caller passes the resolved value.
pub struct MerchCategoryRepo;

impl MerchCategoryRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateMerchCategory,
        slug: &str,
    ) -> Result<MerchCategory, sqlx::Error> {
        let query = format!(
            "INSERT INTO merch_categories (name, slug) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MerchCategory>(&query)
            .bind(&input.name)
            .bind(slug)
            .fetch_one(pool)
            .await
    }

    /// List categories in creation order.
    pub async fn list(pool: &PgPool) -> Result<Vec<MerchCategory>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM merch_categories ORDER BY id ASC");
        sqlx::query_as::<_, MerchCategory>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<MerchCategory>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM merch_categories WHERE id = $1");
        sqlx::query_as::<_, MerchCategory>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMerchCategory,
        slug: Option<&str>,
    ) -> Result<Option<MerchCategory>, sqlx::Error> {
        let query = format!(
            "UPDATE merch_categories SET
                name = COALESCE($2, name),
                slug = COALESCE($3, slug),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MerchCategory>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM merch_categories WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
