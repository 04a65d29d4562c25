//! Media asset metadata model and DTOs.
//!
//! File bytes live with the storage provider; this table records the
//! metadata plus the public URL returned at upload time.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ypsl_core::types::{DbId, Timestamp};

/// Category folders for the media library: the project codes plus the
/// structural folders the admin panel groups uploads under.
pub const MEDIA_CATEGORIES: &[&str] = &[
    "ypsl",
    "executive-committees",
    "standing-committees",
    "ai-driven-sri-lanka",
    "sl-inspire",
    "lets-talk",
    "insl",
    "studpro",
    "y2npro",
    "merch-payslips",
    "others",
    "merchants",
    "ieee-projects",
    "events",
];

/// A media row from the `media` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Media {
    pub id: DbId,
    pub alt: String,
    pub category: String,
    pub filename: String,
    pub mime_type: String,
    pub size_bytes: i64,
    /// Public URL of the stored file.
    pub url: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a media row after the file has been stored.
#[derive(Debug, Clone)]
pub struct CreateMedia {
    pub alt: String,
    pub category: String,
    pub filename: String,
    pub mime_type: String,
    pub size_bytes: i64,
    pub url: String,
}

/// DTO for updating media metadata. Only `alt` and `category` are
/// mutable; the stored file is write-once.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMedia {
    pub alt: Option<String>,
    pub category: Option<String>,
}
