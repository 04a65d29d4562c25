//! Article author model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ypsl_core::types::{DbId, Timestamp};

/// An author row from the `authors` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Author {
    pub id: DbId,
    pub name: String,
    pub project: Option<String>,
    pub bio: Option<String>,
    pub avatar_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an author.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAuthor {
    pub name: String,
    pub project: Option<String>,
    pub bio: Option<String>,
    pub avatar_id: Option<DbId>,
}

/// DTO for updating an author. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAuthor {
    pub name: Option<String>,
    pub project: Option<String>,
    pub bio: Option<String>,
    pub avatar_id: Option<DbId>,
}
