//! PostgreSQL implementation of the link repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

const LINK_COLUMNS: &str = "id, long_url, short_url, created_at, click_count";

/// PostgreSQL repository for link storage and retrieval.
///
/// Every mutation is a single-row statement, so each operation is atomic at
/// record granularity and a cancelled request never leaves a partial write.
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
        let link = sqlx::query_as::<_, Link>(&format!(
            "INSERT INTO links (long_url, short_url)
             VALUES ($1, $2)
             RETURNING {LINK_COLUMNS}"
        ))
        .bind(&new_link.long_url)
        .bind(&new_link.short_url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Link>, AppError> {
        let link = sqlx::query_as::<_, Link>(&format!(
            "SELECT {LINK_COLUMNS} FROM links WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn find_by_short_url(&self, short_url: &str) -> Result<Option<Link>, AppError> {
        let link = sqlx::query_as::<_, Link>(&format!(
            "SELECT {LINK_COLUMNS} FROM links WHERE short_url = $1"
        ))
        .bind(short_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<Link>, AppError> {
        let link = sqlx::query_as::<_, Link>(&format!(
            "SELECT {LINK_COLUMNS} FROM links WHERE long_url = $1"
        ))
        .bind(long_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn list(&self) -> Result<Vec<Link>, AppError> {
        let links = sqlx::query_as::<_, Link>(&format!(
            "SELECT {LINK_COLUMNS} FROM links ORDER BY id ASC"
        ))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(links)
    }

    async fn update(&self, link: Link) -> Result<Link, AppError> {
        let updated = sqlx::query_as::<_, Link>(&format!(
            "UPDATE links
             SET long_url = $2, short_url = $3, created_at = $4, click_count = $5
             WHERE id = $1
             RETURNING {LINK_COLUMNS}"
        ))
        .bind(link.id)
        .bind(&link.long_url)
        .bind(&link.short_url)
        .bind(link.created_at)
        .bind(link.click_count)
        .fetch_optional(self.pool.as_ref())
        .await?;

        updated.ok_or_else(|| AppError::not_found("Link not found", json!({ "id": link.id })))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM links WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn increment_clicks(&self, short_url: &str) -> Result<Option<Link>, AppError> {
        // Single-statement read-modify-write; concurrent resolutions of the
        // same alias serialize on the row lock.
        let link = sqlx::query_as::<_, Link>(&format!(
            "UPDATE links
             SET click_count = click_count + 1
             WHERE short_url = $1
             RETURNING {LINK_COLUMNS}"
        ))
        .bind(short_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(link)
    }
}
