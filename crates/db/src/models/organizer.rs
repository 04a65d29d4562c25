//! Event organizer model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ypsl_core::types::{DbId, Timestamp};

/// An organizer row from the `organizers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Organizer {
    pub id: DbId,
    pub name: String,
    pub logo_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrganizer {
    pub name: String,
    pub logo_id: DbId,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateOrganizer {
    pub name: Option<String>,
    pub logo_id: Option<DbId>,
}
