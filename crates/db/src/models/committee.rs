//! Standing committee (year) and sub-committee member models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ypsl_core::types::{DbId, Timestamp};

/// A committee-year row from the `committees` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Committee {
    pub id: DbId,
    /// e.g. "2026". Unique.
    pub year: String,
    pub theme: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCommittee {
    pub year: String,
    pub theme: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCommittee {
    pub year: Option<String>,
    pub theme: Option<String>,
}

/// A sub-committee member row. `full_name` is derived from the name parts
/// at write time, never supplied by the client.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SubCommitteeMember {
    pub id: DbId,
    pub committee_id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub position: Option<String>,
    pub photo_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateSubCommitteeMember {
    pub committee_id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub position: Option<String>,
    pub photo_id: Option<DbId>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSubCommitteeMember {
    pub committee_id: Option<DbId>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub position: Option<String>,
    pub photo_id: Option<DbId>,
}
