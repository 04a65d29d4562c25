//! Repository for the `events` table.
//!
//! Read and write operations take the caller's [`Access`] decision and
//! lower its scoping predicate into the statement itself, so a
//! project-scoped principal can neither see nor touch rows outside their
//! partition and the public only ever reaches published rows.

use sqlx::{PgPool, QueryBuilder};
use ypsl_core::policy::Access;
use ypsl_core::types::DbId;

use crate::models::event::{CreateEvent, Event, UpdateEvent};
use crate::sql::{self, push_coalesce};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, slug, project, description, start_date, end_date, start_time, \
     end_time, timezone, event_type, venue_location, online_platform, organizer_ids, image_id, \
     registration_url, hashtags, status, created_at, updated_at";

/// Provides access-scoped CRUD operations for events.
pub struct EventRepo;

impl EventRepo {
    /// Insert a new event, returning the created row.
    ///
    /// The caller has already passed the create policy gate and applied
    /// project stamping and slug derivation.
    pub async fn create(
        pool: &PgPool,
        input: &CreateEvent,
        slug: &str,
        project: &str,
    ) -> Result<Event, sqlx::Error> {
        let query = format!(
            "INSERT INTO events (title, slug, project, description, start_date, end_date,
                start_time, end_time, timezone, event_type, venue_location, online_platform,
                organizer_ids, image_id, registration_url, hashtags, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, COALESCE($9, 'Asia/Colombo'), $10, $11,
                $12, $13, $14, $15, $16, COALESCE($17, 'draft'))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(&input.title)
            .bind(slug)
            .bind(project)
            .bind(&input.description)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.start_time)
            .bind(input.end_time)
            .bind(&input.timezone)
            .bind(&input.event_type)
            .bind(&input.venue_location)
            .bind(&input.online_platform)
            .bind(&input.organizer_ids)
            .bind(input.image_id)
            .bind(&input.registration_url)
            .bind(&input.hashtags)
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }

    /// List events visible under `access`, newest start date first.
    pub async fn list(pool: &PgPool, access: &Access) -> Result<Vec<Event>, sqlx::Error> {
        if access.is_deny() {
            return Ok(vec![]);
        }
        let mut qb = QueryBuilder::new(format!("SELECT {COLUMNS} FROM events WHERE TRUE"));
        sql::push_access(&mut qb, access);
        qb.push(" ORDER BY start_date DESC, id DESC");
        qb.build_query_as::<Event>().fetch_all(pool).await
    }

    /// Find an event by id if `access` reaches it.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
        access: &Access,
    ) -> Result<Option<Event>, sqlx::Error> {
        if access.is_deny() {
            return Ok(None);
        }
        let mut qb = QueryBuilder::new(format!("SELECT {COLUMNS} FROM events WHERE id = "));
        qb.push_bind(id);
        sql::push_access(&mut qb, access);
        qb.build_query_as::<Event>().fetch_optional(pool).await
    }

    /// Find an event by slug if `access` reaches it.
    pub async fn find_by_slug(
        pool: &PgPool,
        slug: &str,
        access: &Access,
    ) -> Result<Option<Event>, sqlx::Error> {
        if access.is_deny() {
            return Ok(None);
        }
        let mut qb = QueryBuilder::new(format!("SELECT {COLUMNS} FROM events WHERE slug = "));
        qb.push_bind(slug.to_string());
        sql::push_access(&mut qb, access);
        qb.build_query_as::<Event>().fetch_optional(pool).await
    }

    /// Update an event in place. Only non-`None` fields are applied; the
    /// scoping predicate is part of the `WHERE`, so a row outside the
    /// caller's scope comes back as `None` (surfaced as not-found).
    ///
    /// `project` and `slug` carry the already-stamped/normalized values,
    /// or `None` to leave the column untouched.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEvent,
        slug: Option<&str>,
        project: Option<&str>,
        access: &Access,
    ) -> Result<Option<Event>, sqlx::Error> {
        if access.is_deny() {
            return Ok(None);
        }
        let mut qb = QueryBuilder::new("UPDATE events SET updated_at = NOW()");
        push_coalesce(&mut qb, "title", input.title.clone());
        push_coalesce(&mut qb, "slug", slug.map(str::to_string));
        push_coalesce(&mut qb, "project", project.map(str::to_string));
        push_coalesce(&mut qb, "description", input.description.clone());
        push_coalesce(&mut qb, "start_date", input.start_date);
        push_coalesce(&mut qb, "end_date", input.end_date);
        push_coalesce(&mut qb, "start_time", input.start_time);
        push_coalesce(&mut qb, "end_time", input.end_time);
        push_coalesce(&mut qb, "timezone", input.timezone.clone());
        push_coalesce(&mut qb, "event_type", input.event_type.clone());
        push_coalesce(&mut qb, "venue_location", input.venue_location.clone());
        push_coalesce(&mut qb, "online_platform", input.online_platform.clone());
        push_coalesce(&mut qb, "organizer_ids", input.organizer_ids.clone());
        push_coalesce(&mut qb, "image_id", input.image_id);
        push_coalesce(&mut qb, "registration_url", input.registration_url.clone());
        push_coalesce(&mut qb, "hashtags", input.hashtags.clone());
        push_coalesce(&mut qb, "status", input.status.clone());
        qb.push(" WHERE id = ");
        qb.push_bind(id);
        sql::push_access(&mut qb, access);
        qb.push(format!(" RETURNING {COLUMNS}"));
        qb.build_query_as::<Event>().fetch_optional(pool).await
    }

    /// Delete an event. Returns `true` iff a row within scope was removed.
    pub async fn delete(pool: &PgPool, id: DbId, access: &Access) -> Result<bool, sqlx::Error> {
        if access.is_deny() {
            return Ok(false);
        }
        let mut qb = QueryBuilder::new("DELETE FROM events WHERE id = ");
        qb.push_bind(id);
        sql::push_access(&mut qb, access);
        let result = qb.build().execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }
}
