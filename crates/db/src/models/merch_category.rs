//! Merchandise category model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ypsl_core::types::{DbId, Timestamp};

/// A category row from the `merch_categories` table. The slug is what
/// storefront clients filter products by (e.g. `t-shirt`, `hoodie`).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MerchCategory {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateMerchCategory {
    pub name: String,
    /// Derived from `name` when omitted.
    pub slug: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMerchCategory {
    pub name: Option<String>,
    pub slug: Option<String>,
}
