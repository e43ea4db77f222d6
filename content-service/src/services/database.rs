//! Database service for content-service.

use crate::models::{Content, ContentCreated, ContentDeleted, ContentSummary, ContentUpdated};
use service_core::error::AppError;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions, PgSslMode};
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, instrument};

/// Database connection pool wrapper.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Create a new database connection pool.
    #[instrument(skip(database_url), fields(service = "content-service"))]
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self, AppError> {
        info!(
            max_connections = max_connections,
            min_connections = min_connections,
            "Connecting to PostgreSQL"
        );

        // TLS is opportunistic and the server certificate is not verified.
        let options = PgConnectOptions::from_str(database_url)
            .map_err(|e| AppError::ConfigError(anyhow::anyhow!("Invalid database URL: {}", e)))?
            .ssl_mode(PgSslMode::Prefer);

        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(Duration::from_secs(30))
            .idle_timeout(Duration::from_secs(600))
            .connect_with(options)
            .await
            .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Failed to connect: {}", e)))?;

        info!("PostgreSQL connection pool established");

        Ok(Self { pool })
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Check database health.
    #[instrument(skip(self))]
    pub async fn health_check(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Health check failed: {}", e)))?;
        Ok(())
    }

    /// Create the content table if it does not exist yet.
    #[instrument(skip(self))]
    pub async fn ensure_schema(&self) -> Result<(), AppError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS content (
                id BIGSERIAL PRIMARY KEY,
                title TEXT NOT NULL,
                html_content TEXT NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::DatabaseError(anyhow::anyhow!("Failed to create content table: {}", e))
        })?;

        info!("Content table ready");
        Ok(())
    }

    /// Insert a new record. Input is already trimmed and validated.
    #[instrument(skip(self, html_content), fields(title = %title))]
    pub async fn insert_content(
        &self,
        title: &str,
        html_content: &str,
    ) -> Result<ContentCreated, AppError> {
        let created = sqlx::query_as::<_, ContentCreated>(
            r#"
            INSERT INTO content (title, html_content)
            VALUES ($1, $2)
            RETURNING id, title, created_at
            "#,
        )
        .bind(title)
        .bind(html_content)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Failed to insert content: {}", e)))?;

        info!(id = created.id, "Content created");

        Ok(created)
    }

    /// List all records, most recent first, without the HTML bodies.
    #[instrument(skip(self))]
    pub async fn list_content(&self) -> Result<Vec<ContentSummary>, AppError> {
        let summaries = sqlx::query_as::<_, ContentSummary>(
            r#"
            SELECT id, title, created_at, updated_at, LENGTH(html_content) AS content_length
            FROM content
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Failed to list content: {}", e)))?;

        Ok(summaries)
    }

    /// Get a full record by id.
    #[instrument(skip(self))]
    pub async fn get_content(&self, id: i64) -> Result<Option<Content>, AppError> {
        let content = sqlx::query_as::<_, Content>(
            r#"
            SELECT id, title, html_content, created_at, updated_at
            FROM content
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Failed to get content: {}", e)))?;

        Ok(content)
    }

    /// Replace title and body of a record, refreshing `updated_at`.
    /// `created_at` is never touched.
    #[instrument(skip(self, html_content), fields(id = id))]
    pub async fn update_content(
        &self,
        id: i64,
        title: &str,
        html_content: &str,
    ) -> Result<Option<ContentUpdated>, AppError> {
        let updated = sqlx::query_as::<_, ContentUpdated>(
            r#"
            UPDATE content
            SET title = $2, html_content = $3, updated_at = NOW()
            WHERE id = $1
            RETURNING id, title, updated_at
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(html_content)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Failed to update content: {}", e)))?;

        if updated.is_some() {
            info!(id = id, "Content updated");
        }

        Ok(updated)
    }

    /// Permanently remove a record.
    #[instrument(skip(self))]
    pub async fn delete_content(&self, id: i64) -> Result<Option<ContentDeleted>, AppError> {
        let deleted = sqlx::query_as::<_, ContentDeleted>(
            r#"
            DELETE FROM content
            WHERE id = $1
            RETURNING id, title
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Failed to delete content: {}", e)))?;

        if deleted.is_some() {
            info!(id = id, "Content deleted");
        }

        Ok(deleted)
    }
}
