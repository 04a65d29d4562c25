//! Repository for the `articles` table. Access-scoped like events.

use sqlx::{PgPool, QueryBuilder};
use ypsl_core::policy::Access;
use ypsl_core::types::DbId;

use crate::models::article::{Article, CreateArticle, UpdateArticle};
use crate::sql::{self, push_coalesce};

const COLUMNS: &str = "id, title, slug, project, content, author_id, featured_image_id, \
     publish_date, status, created_at, updated_at";

/// Provides access-scoped CRUD operations for articles.
pub struct ArticleRepo;

impl ArticleRepo {
    /// Insert a new article, returning the created row. `slug` and
    /// `project` carry the derived/stamped values.
    pub async fn create(
        pool: &PgPool,
        input: &CreateArticle,
        slug: &str,
        project: Option<&str>,
    ) -> Result<Article, sqlx::Error> {
        let query = format!(
            "INSERT INTO articles (title, slug, project, content, author_id, featured_image_id,
                publish_date, status)
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, NOW()), COALESCE($8, 'draft'))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(&input.title)
            .bind(slug)
            .bind(project)
            .bind(&input.content)
            .bind(input.author_id)
            .bind(input.featured_image_id)
            .bind(input.publish_date)
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }

    /// List articles visible under `access`, newest publish date first.
    pub async fn list(pool: &PgPool, access: &Access) -> Result<Vec<Article>, sqlx::Error> {
        if access.is_deny() {
            return Ok(vec![]);
        }
        let mut qb = QueryBuilder::new(format!("SELECT {COLUMNS} FROM articles WHERE TRUE"));
        sql::push_access(&mut qb, access);
        qb.push(" ORDER BY publish_date DESC, id DESC");
        qb.build_query_as::<Article>().fetch_all(pool).await
    }

    /// Find an article by id if `access` reaches it.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
        access: &Access,
    ) -> Result<Option<Article>, sqlx::Error> {
        if access.is_deny() {
            return Ok(None);
        }
        let mut qb = QueryBuilder::new(format!("SELECT {COLUMNS} FROM articles WHERE id = "));
        qb.push_bind(id);
        sql::push_access(&mut qb, access);
        qb.build_query_as::<Article>().fetch_optional(pool).await
    }

    /// Find an article by slug if `access` reaches it.
    pub async fn find_by_slug(
        pool: &PgPool,
        slug: &str,
        access: &Access,
    ) -> Result<Option<Article>, sqlx::Error> {
        if access.is_deny() {
            return Ok(None);
        }
        let mut qb = QueryBuilder::new(format!("SELECT {COLUMNS} FROM articles WHERE slug = "));
        qb.push_bind(slug.to_string());
        sql::push_access(&mut qb, access);
        qb.build_query_as::<Article>().fetch_optional(pool).await
    }

    /// Update an article; rows outside the caller's scope come back as
    /// `None`.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateArticle,
        slug: Option<&str>,
        project: Option<&str>,
        access: &Access,
    ) -> Result<Option<Article>, sqlx::Error> {
        if access.is_deny() {
            return Ok(None);
        }
        let mut qb = QueryBuilder::new("UPDATE articles SET updated_at = NOW()");
        push_coalesce(&mut qb, "title", input.title.clone());
        push_coalesce(&mut qb, "slug", slug.map(str::to_string));
        push_coalesce(&mut qb, "project", project.map(str::to_string));
        push_coalesce(&mut qb, "content", input.content.clone());
        push_coalesce(&mut qb, "author_id", input.author_id);
        push_coalesce(&mut qb, "featured_image_id", input.featured_image_id);
        push_coalesce(&mut qb, "publish_date", input.publish_date);
        push_coalesce(&mut qb, "status", input.status.clone());
        qb.push(" WHERE id = ");
        qb.push_bind(id);
        sql::push_access(&mut qb, access);
        qb.push(format!(" RETURNING {COLUMNS}"));
        qb.build_query_as::<Article>().fetch_optional(pool).await
    }

    /// Delete an article. Returns `true` iff a row within scope was removed.
    pub async fn delete(pool: &PgPool, id: DbId, access: &Access) -> Result<bool, sqlx::Error> {
        if access.is_deny() {
            return Ok(false);
        }
        let mut qb = QueryBuilder::new("DELETE FROM articles WHERE id = ");
        qb.push_bind(id);
        sql::push_access(&mut qb, access);
        let result = qb.build().execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }
}
