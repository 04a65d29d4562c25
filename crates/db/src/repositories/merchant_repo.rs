//! Repository for the `merchants` table.

use sqlx::PgPool;
use ypsl_core::types::DbId;

use crate::models::merchant::{CreateMerchant, Merchant, UpdateMerchant};

const COLUMNS: &str = "id, merchant_id, merchant_name, description, price, sizes, image_id, \
     available, created_at, updated_at";

/// Provides CRUD operations for merchandise listings.
pub struct MerchantRepo;

impl MerchantRepo {
    pub async fn create(pool: &PgPool, input: &CreateMerchant) -> Result<Merchant, sqlx::Error> {
        let query = format!(
            "INSERT INTO merchants (merchant_id, merchant_name, description, price, sizes,
                image_id, available)
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, TRUE))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Merchant>(&query)
            .bind(&input.merchant_id)
            .bind(&input.merchant_name)
            .bind(&input.description)
            .bind(input.price)
            .bind(&input.sizes)
            .bind(input.image_id)
            .bind(input.available)
            .fetch_one(pool)
            .await
    }

    /// List merchandise, available items first, then by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Merchant>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM merchants ORDER BY available DESC, merchant_name ASC"
        );
        sqlx::query_as::<_, Merchant>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Merchant>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM merchants WHERE id = $1");
        sqlx::query_as::<_, Merchant>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMerchant,
    ) -> Result<Option<Merchant>, sqlx::Error> {
        let query = format!(
            "UPDATE merchants SET
                merchant_id = COALESCE($2, merchant_id),
                merchant_name = COALESCE($3, merchant_name),
                description = COALESCE($4, description),
                price = COALESCE($5, price),
                sizes = COALESCE($6, sizes),
                image_id = COALESCE($7, image_id),
                available = COALESCE($8, available),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Merchant>(&query)
            .bind(id)
            .bind(&input.merchant_id)
            .bind(&input.merchant_name)
            .bind(&input.description)
            .bind(input.price)
            .bind(&input.sizes)
            .bind(input.image_id)
            .bind(input.available)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM merchants WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
