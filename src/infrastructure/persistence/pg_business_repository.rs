//! PostgreSQL implementation of the business repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{BusinessRecord, DateRange};
use crate::domain::repositories::BusinessRepository;
use crate::error::AppError;

/// Raw row shape of the listing query, narrowed into [`BusinessRecord`].
#[derive(Debug, sqlx::FromRow)]
struct BusinessRow {
    id: i64,
    name: String,
    region_id: Option<i64>,
    region_name: Option<String>,
    created_at: DateTime<Utc>,
    is_verified: bool,
    view_count: Option<i64>,
}

impl From<BusinessRow> for BusinessRecord {
    fn from(r: BusinessRow) -> Self {
        BusinessRecord::new(
            r.id,
            r.name,
            r.region_id,
            r.region_name,
            r.created_at,
            r.is_verified,
            r.view_count,
        )
    }
}

/// PostgreSQL repository for business listings.
pub struct PgBusinessRepository {
    pool: Arc<PgPool>,
}

impl PgBusinessRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BusinessRepository for PgBusinessRepository {
    async fn list_for_duplicate_scan(&self) -> Result<Vec<BusinessRecord>, AppError> {
        let rows = sqlx::query_as::<_, BusinessRow>(
            r#"
            SELECT b.id, b.name, b.region_id, r.name AS region_name,
                   b.created_at, b.is_verified, b.view_count
            FROM businesses b
            LEFT JOIN regions r ON r.id = b.region_id
            ORDER BY b.created_at, b.id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(BusinessRecord::from).collect())
    }

    async fn count_created_between(
        &self,
        range: DateRange,
        verified_only: bool,
    ) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM businesses
            WHERE created_at >= $1
              AND created_at < $2
              AND ($3 = FALSE OR is_verified)
            "#,
        )
        .bind(range.from)
        .bind(range.to)
        .bind(verified_only)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(count)
    }

    async fn count_all(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM businesses")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
