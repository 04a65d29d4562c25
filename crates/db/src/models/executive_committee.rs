//! Executive committee member model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ypsl_core::types::{DbId, Timestamp};

/// An executive committee member row, listed per committee year.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ExecutiveCommitteeMember {
    pub id: DbId,
    pub year: String,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub photo_id: Option<DbId>,
    /// Display order within the year's listing.
    pub ordering: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateExecutiveCommitteeMember {
    pub year: String,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub photo_id: Option<DbId>,
    #[serde(default)]
    pub ordering: i32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateExecutiveCommitteeMember {
    pub year: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub position: Option<String>,
    pub photo_id: Option<DbId>,
    pub ordering: Option<i32>,
}
