//! PostgreSQL implementation of campaign repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{Campaign, NewCampaign};
use crate::domain::repositories::CampaignRepository;
use crate::error::AppError;

/// PostgreSQL repository for campaign storage and retrieval.
pub struct PgCampaignRepository {
    pool: Arc<PgPool>,
}

impl PgCampaignRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct CampaignRow {
    id: i32,
    title: String,
    description: String,
    image_url: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl From<CampaignRow> for Campaign {
    fn from(r: CampaignRow) -> Self {
        Campaign::new(
            r.id,
            r.title,
            r.description,
            r.image_url,
            r.created_at,
            r.updated_at,
        )
    }
}

#[async_trait]
impl CampaignRepository for PgCampaignRepository {
    async fn create(&self, new_campaign: NewCampaign) -> Result<Campaign, AppError> {
        let row = sqlx::query_as::<_, CampaignRow>(
            r#"
            INSERT INTO campaigns (title, description, image_url)
            VALUES ($1, $2, $3)
            RETURNING id, title, description, image_url, created_at, updated_at
            "#,
        )
        .bind(&new_campaign.title)
        .bind(&new_campaign.description)
        .bind(&new_campaign.image_url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Campaign>, AppError> {
        let row = sqlx::query_as::<_, CampaignRow>(
            r#"
            SELECT id, title, description, image_url, created_at, updated_at
            FROM campaigns
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Campaign::from))
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Campaign>, AppError> {
        let rows = sqlx::query_as::<_, CampaignRow>(
            r#"
            SELECT id, title, description, image_url, created_at, updated_at
            FROM campaigns
            ORDER BY created_at DESC, id DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Campaign::from).collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM campaigns")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
