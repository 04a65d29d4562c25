//! Blog article model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ypsl_core::types::{DbId, Timestamp};

/// An article row from the `articles` table. `content` holds the rendered
/// rich-text document as JSON text.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Article {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub project: Option<String>,
    pub content: String,
    pub author_id: DbId,
    pub featured_image_id: DbId,
    pub publish_date: Timestamp,
    /// `draft` | `published`.
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an article.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateArticle {
    pub title: String,
    pub slug: Option<String>,
    pub project: Option<String>,
    pub content: String,
    pub author_id: DbId,
    pub featured_image_id: DbId,
    /// Defaults to now if omitted.
    pub publish_date: Option<Timestamp>,
    pub status: Option<String>,
}

/// DTO for updating an article. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateArticle {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub project: Option<String>,
    pub content: Option<String>,
    pub author_id: Option<DbId>,
    pub featured_image_id: Option<DbId>,
    pub publish_date: Option<Timestamp>,
    pub status: Option<String>,
}
