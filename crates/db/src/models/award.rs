//! Award model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ypsl_core::types::{DbId, Timestamp};

/// An award row from the `awards` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Award {
    pub id: DbId,
    pub award_name: String,
    pub award_category: Option<String>,
    pub award_image_id: Option<DbId>,
    pub year: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateAward {
    pub award_name: String,
    pub award_category: Option<String>,
    pub award_image_id: Option<DbId>,
    pub year: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAward {
    pub award_name: Option<String>,
    pub award_category: Option<String>,
    pub award_image_id: Option<DbId>,
    pub year: Option<String>,
}
