//! Event entity model and DTOs.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ypsl_core::types::{DbId, Timestamp};

/// An event row from the `events` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Event {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub project: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    /// IANA timezone name the event is announced in (default Asia/Colombo).
    pub timezone: String,
    /// `physical` | `online` | `hybrid`.
    pub event_type: String,
    pub venue_location: Option<String>,
    pub online_platform: Option<String>,
    pub organizer_ids: Vec<DbId>,
    pub image_id: DbId,
    pub registration_url: Option<String>,
    pub hashtags: Option<String>,
    /// `draft` | `published`.
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an event. `slug` is derived from `title` when absent;
/// `project` is stamped for project-scoped principals.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEvent {
    pub title: String,
    pub slug: Option<String>,
    pub project: Option<String>,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub timezone: Option<String>,
    pub event_type: String,
    pub venue_location: Option<String>,
    pub online_platform: Option<String>,
    #[serde(default)]
    pub organizer_ids: Vec<DbId>,
    pub image_id: DbId,
    pub registration_url: Option<String>,
    pub hashtags: Option<String>,
    pub status: Option<String>,
}

/// DTO for updating an event. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateEvent {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub project: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub timezone: Option<String>,
    pub event_type: Option<String>,
    pub venue_location: Option<String>,
    pub online_platform: Option<String>,
    pub organizer_ids: Option<Vec<DbId>>,
    pub image_id: Option<DbId>,
    pub registration_url: Option<String>,
    pub hashtags: Option<String>,
    pub status: Option<String>,
}
