//! Public project/initiative profile model and DTOs.
//!
//! These are the showcase entries on the public site; the project *codes*
//! used for scoping are the closed enum in `ypsl_core::principal`.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ypsl_core::types::{DbId, Timestamp};

/// A project profile row from the `project_profiles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectProfile {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub logo_id: DbId,
    pub link: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateProjectProfile {
    pub name: String,
    pub description: String,
    pub logo_id: DbId,
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProjectProfile {
    pub name: Option<String>,
    pub description: Option<String>,
    pub logo_id: Option<DbId>,
    pub link: Option<String>,
}
