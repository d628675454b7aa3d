//! PostgreSQL implementation of the link repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::{AppError, map_sqlx_error};

/// PostgreSQL repository for link storage and retrieval.
///
/// Uses bound SQLx parameters for SQL injection protection. The `slug`
/// column carries a unique index; a violated insert surfaces as
/// [`AppError::DuplicateSlug`] for the service-level retry.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        sqlx::query_as::<_, Link>(
            r#"
            INSERT INTO links (slug, label, original_url)
            VALUES ($1, $2, $3)
            RETURNING id, slug, label, original_url, created_at
            "#,
        )
        .bind(&new_link.slug)
        .bind(&new_link.label)
        .bind(&new_link.original_url)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| map_sqlx_error(e, &new_link.slug))
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Link>, AppError> {
        sqlx::query_as::<_, Link>(
            r#"
            SELECT id, slug, label, original_url, created_at
            FROM links
            WHERE slug = $1
            "#,
        )
        .bind(slug)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(AppError::Persistence)
    }
}
