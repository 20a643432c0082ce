//! PostgreSQL implementation of the lookup audit repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{AuditEntry, NewAuditEntry};
use crate::domain::repositories::AuditRepository;
use crate::error::AppError;

/// PostgreSQL repository for the `movie_lookups` audit table.
///
/// Uses bound parameters for every value; the table has no unique
/// constraints, so each insert appends a row.
pub struct PgAuditRepository {
    pool: Arc<PgPool>,
}

impl PgAuditRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct AuditRow {
    id: i64,
    imdb_id: String,
    title: String,
    year: String,
    released: String,
    imdb_rating: String,
    logged_at: DateTime<Utc>,
}

impl From<AuditRow> for AuditEntry {
    fn from(r: AuditRow) -> Self {
        AuditEntry {
            id: r.id,
            imdb_id: r.imdb_id,
            title: r.title,
            year: r.year,
            released: r.released,
            imdb_rating: r.imdb_rating,
            logged_at: r.logged_at,
        }
    }
}

#[async_trait]
impl AuditRepository for PgAuditRepository {
    async fn store(&self, entry: NewAuditEntry) -> Result<AuditEntry, AppError> {
        let row = sqlx::query_as::<_, AuditRow>(
            r#"
            INSERT INTO movie_lookups (imdb_id, title, year, released, imdb_rating)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, imdb_id, title, year, released, imdb_rating, logged_at
            "#,
        )
        .bind(&entry.imdb_id)
        .bind(&entry.title)
        .bind(&entry.year)
        .bind(&entry.released)
        .bind(&entry.imdb_rating)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .is_ok()
    }
}
