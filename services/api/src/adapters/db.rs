//! services/api/src/adapters/db.rs
//!
//! This module contains the database adapter, which is the concrete implementation
//! of the `OpinionStore` port from the `core` crate. It handles all interactions
//! with the PostgreSQL database using `sqlx`, including the analytics roll-ups,
//! which are expressed as SQL so grouping and concurrent writes stay the
//! database's problem.
//!
//! Calendar extraction (`EXTRACT(YEAR/MONTH/DAY ...)`) buckets timestamps in
//! the server's configured time zone, so trend dates follow the deployment
//! zone rather than a fixed UTC day.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use moviepulse_core::domain::{
    AnalyticsReport, BucketCount, CategoryDayKey, DayKey, Demographics, Opinion, OpinionCategory,
    Sentiment,
};
use moviepulse_core::ports::{OpinionFilter, OpinionStore, PortError, PortResult};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

const OPINION_COLUMNS: &str =
    "id, category, question, answer, user_id, age, region, gender, sentiment, impact, created_at, tags";

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// A database adapter that implements the `OpinionStore` port.
#[derive(Clone)]
pub struct PgOpinionStore {
    pool: PgPool,
}

impl PgOpinionStore {
    /// Creates a new `PgOpinionStore`.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// A helper function to run database migrations at startup.
    pub async fn run_migrations(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }
}

//=========================================================================================
// "Impure" Database Record Structs
//=========================================================================================

#[derive(FromRow)]
struct OpinionRecord {
    id: Uuid,
    category: String,
    question: String,
    answer: String,
    user_id: String,
    age: Option<i32>,
    region: Option<String>,
    gender: Option<String>,
    sentiment: String,
    impact: i32,
    created_at: DateTime<Utc>,
    tags: Vec<String>,
}

impl OpinionRecord {
    fn to_domain(self) -> PortResult<Opinion> {
        let category = OpinionCategory::parse(&self.category).ok_or_else(|| {
            PortError::Unexpected(format!("Unknown stored category '{}'", self.category))
        })?;
        let sentiment = Sentiment::parse(&self.sentiment).ok_or_else(|| {
            PortError::Unexpected(format!("Unknown stored sentiment '{}'", self.sentiment))
        })?;
        Ok(Opinion {
            id: self.id,
            category,
            question: self.question,
            answer: self.answer,
            user_id: self.user_id,
            demographics: Demographics {
                age: self.age,
                region: self.region,
                gender: self.gender,
            },
            sentiment,
            impact: self.impact,
            created_at: self.created_at,
            tags: self.tags,
        })
    }
}

#[derive(FromRow)]
struct CountRow {
    id: String,
    count: i64,
}

#[derive(FromRow)]
struct DayRow {
    year: i32,
    month: i32,
    day: i32,
    count: i64,
}

#[derive(FromRow)]
struct CategoryDayRow {
    category: String,
    year: i32,
    month: i32,
    day: i32,
    count: i64,
}

fn unexpected(e: sqlx::Error) -> PortError {
    PortError::Unexpected(e.to_string())
}

//=========================================================================================
// `OpinionStore` Trait Implementation
//=========================================================================================

#[async_trait]
impl OpinionStore for PgOpinionStore {
    async fn insert(&self, opinion: Opinion) -> PortResult<Opinion> {
        sqlx::query(
            "INSERT INTO opinions (id, category, question, answer, user_id, age, region, gender, sentiment, impact, created_at, tags) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)",
        )
        .bind(opinion.id)
        .bind(opinion.category.as_str())
        .bind(&opinion.question)
        .bind(&opinion.answer)
        .bind(&opinion.user_id)
        .bind(opinion.demographics.age)
        .bind(&opinion.demographics.region)
        .bind(&opinion.demographics.gender)
        .bind(opinion.sentiment.as_str())
        .bind(opinion.impact)
        .bind(opinion.created_at)
        .bind(&opinion.tags)
        .execute(&self.pool)
        .await
        .map_err(unexpected)?;
        Ok(opinion)
    }

    async fn list(&self, page: u64, limit: u64) -> PortResult<(Vec<Opinion>, u64)> {
        let offset = page.saturating_sub(1) * limit;
        let records = sqlx::query_as::<_, OpinionRecord>(&format!(
            "SELECT {OPINION_COLUMNS} FROM opinions ORDER BY created_at DESC OFFSET $1 LIMIT $2"
        ))
        .bind(offset as i64)
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(unexpected)?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM opinions")
            .fetch_one(&self.pool)
            .await
            .map_err(unexpected)?;

        let opinions = records
            .into_iter()
            .map(OpinionRecord::to_domain)
            .collect::<PortResult<Vec<_>>>()?;
        Ok((opinions, total as u64))
    }

    async fn list_by_category(
        &self,
        category: OpinionCategory,
        filter: OpinionFilter<'_>,
        now: DateTime<Utc>,
    ) -> PortResult<Vec<Opinion>> {
        let cutoff = filter.timeframe.map(|timeframe| timeframe.cutoff(now));
        let records = sqlx::query_as::<_, OpinionRecord>(&format!(
            "SELECT {OPINION_COLUMNS} FROM opinions \
             WHERE category = $1 \
               AND ($2::text IS NULL OR region = $2) \
               AND ($3::text IS NULL OR sentiment = $3) \
               AND ($4::timestamptz IS NULL OR created_at >= $4) \
             ORDER BY created_at DESC"
        ))
        .bind(category.as_str())
        .bind(filter.region)
        .bind(filter.sentiment.map(Sentiment::as_str))
        .bind(cutoff)
        .fetch_all(&self.pool)
        .await
        .map_err(unexpected)?;

        records.into_iter().map(OpinionRecord::to_domain).collect()
    }

    async fn analytics(&self, now: DateTime<Utc>) -> PortResult<AnalyticsReport> {
        let thirty_days_ago = now - Duration::days(30);

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM opinions")
            .fetch_one(&self.pool)
            .await
            .map_err(unexpected)?;

        let category_rows = sqlx::query_as::<_, CountRow>(
            "SELECT category AS id, COUNT(*) AS count FROM opinions GROUP BY category",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(unexpected)?;
        let category_breakdown = category_rows
            .into_iter()
            .map(|row| {
                let id = OpinionCategory::parse(&row.id).ok_or_else(|| {
                    PortError::Unexpected(format!("Unknown stored category '{}'", row.id))
                })?;
                Ok(BucketCount {
                    id,
                    count: row.count as u64,
                })
            })
            .collect::<PortResult<Vec<_>>>()?;

        let sentiment_rows = sqlx::query_as::<_, CountRow>(
            "SELECT sentiment AS id, COUNT(*) AS count FROM opinions GROUP BY sentiment",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(unexpected)?;
        let sentiment_analysis = sentiment_rows
            .into_iter()
            .map(|row| {
                let id = Sentiment::parse(&row.id).ok_or_else(|| {
                    PortError::Unexpected(format!("Unknown stored sentiment '{}'", row.id))
                })?;
                Ok(BucketCount {
                    id,
                    count: row.count as u64,
                })
            })
            .collect::<PortResult<Vec<_>>>()?;

        let region_rows = sqlx::query_as::<_, CountRow>(
            "SELECT region AS id, COUNT(*) AS count FROM opinions \
             WHERE region IS NOT NULL GROUP BY region ORDER BY count DESC, region LIMIT 10",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(unexpected)?;
        let regional_distribution = region_rows
            .into_iter()
            .map(|row| BucketCount {
                id: row.id,
                count: row.count as u64,
            })
            .collect();

        let day_rows = sqlx::query_as::<_, DayRow>(
            "SELECT EXTRACT(YEAR FROM created_at)::INT4 AS year, \
                    EXTRACT(MONTH FROM created_at)::INT4 AS month, \
                    EXTRACT(DAY FROM created_at)::INT4 AS day, \
                    COUNT(*) AS count \
             FROM opinions WHERE created_at >= $1 \
             GROUP BY 1, 2, 3 ORDER BY 1, 2, 3",
        )
        .bind(thirty_days_ago)
        .fetch_all(&self.pool)
        .await
        .map_err(unexpected)?;
        let time_data = day_rows
            .into_iter()
            .map(|row| BucketCount {
                id: DayKey {
                    year: row.year,
                    month: row.month as u32,
                    day: row.day as u32,
                },
                count: row.count as u64,
            })
            .collect();

        let trend_rows = sqlx::query_as::<_, CategoryDayRow>(
            "SELECT category, \
                    EXTRACT(YEAR FROM created_at)::INT4 AS year, \
                    EXTRACT(MONTH FROM created_at)::INT4 AS month, \
                    EXTRACT(DAY FROM created_at)::INT4 AS day, \
                    COUNT(*) AS count \
             FROM opinions WHERE created_at >= $1 \
             GROUP BY 1, 2, 3, 4 ORDER BY 2, 3, 4, 1",
        )
        .bind(thirty_days_ago)
        .fetch_all(&self.pool)
        .await
        .map_err(unexpected)?;
        let category_trends = trend_rows
            .into_iter()
            .map(|row| {
                let category = OpinionCategory::parse(&row.category).ok_or_else(|| {
                    PortError::Unexpected(format!("Unknown stored category '{}'", row.category))
                })?;
                Ok(BucketCount {
                    id: CategoryDayKey {
                        category,
                        year: row.year,
                        month: row.month as u32,
                        day: row.day as u32,
                    },
                    count: row.count as u64,
                })
            })
            .collect::<PortResult<Vec<_>>>()?;

        Ok(AnalyticsReport {
            total_opinions: total as u64,
            category_breakdown,
            sentiment_analysis,
            regional_distribution,
            time_data,
            category_trends,
        })
    }

    async fn trending(&self) -> PortResult<Vec<BucketCount<String>>> {
        let rows = sqlx::query_as::<_, CountRow>(
            "SELECT tag AS id, COUNT(*) AS count \
             FROM opinions CROSS JOIN LATERAL unnest(tags) AS t(tag) \
             GROUP BY tag ORDER BY count DESC, tag LIMIT 10",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(unexpected)?;

        Ok(rows
            .into_iter()
            .map(|row| BucketCount {
                id: row.id,
                count: row.count as u64,
            })
            .collect())
    }
}
