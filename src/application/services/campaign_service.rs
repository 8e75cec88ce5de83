//! Campaign creation and retrieval service.

use std::sync::Arc;

use serde_json::json;
use url::Url;

use crate::domain::entities::{Campaign, NewCampaign};
use crate::domain::repositories::CampaignRepository;
use crate::error::AppError;

const MAX_TITLE_CHARS: usize = 256;
const MAX_IMAGE_URL_LEN: usize = 1024;

/// Service for creating and reading fundraising campaigns.
pub struct CampaignService<R: CampaignRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: CampaignRepository + ?Sized> CampaignService<R> {
    /// Creates a new campaign service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Validates and stores a new campaign.
    ///
    /// Title and description are trimmed. An empty image URL is treated as
    /// no image.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if:
    /// - Title is empty or longer than 256 characters
    /// - Description is empty
    /// - Image URL is longer than 1024 bytes or not an http(s) URL
    pub async fn create_campaign(
        &self,
        title: &str,
        description: &str,
        image_url: Option<&str>,
    ) -> Result<Campaign, AppError> {
        let title = title.trim();
        let title_chars = title.chars().count();
        if title_chars == 0 || title_chars > MAX_TITLE_CHARS {
            return Err(AppError::bad_request(
                "Title must be 1-256 characters",
                json!({ "provided_length": title_chars }),
            ));
        }

        let description = description.trim();
        if description.is_empty() {
            return Err(AppError::bad_request(
                "Description must not be empty",
                json!({}),
            ));
        }

        let image_url = match image_url.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => Some(validate_image_url(raw)?),
            None => None,
        };

        let campaign = self
            .repository
            .create(NewCampaign {
                title: title.to_string(),
                description: description.to_string(),
                image_url,
            })
            .await?;

        tracing::info!(id = campaign.id, "Campaign created");
        Ok(campaign)
    }

    /// Retrieves a campaign by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no campaign has this id.
    pub async fn get_campaign(&self, id: i32) -> Result<Campaign, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Campaign not found", json!({ "id": id })))
    }

    /// Returns one page of campaigns, newest first, with the total count.
    pub async fn list_campaigns(
        &self,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<Campaign>, i64), AppError> {
        let items = self.repository.list(offset, limit).await?;
        let total = self.repository.count().await?;
        Ok((items, total))
    }

    /// Total number of stored campaigns.
    pub async fn count_campaigns(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}

fn validate_image_url(raw: &str) -> Result<String, AppError> {
    if raw.len() > MAX_IMAGE_URL_LEN {
        return Err(AppError::bad_request(
            "Image URL must be at most 1024 characters",
            json!({ "provided_length": raw.len() }),
        ));
    }

    match Url::parse(raw) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(raw.to_string()),
        _ => Err(AppError::bad_request(
            "Image URL must be an http or https URL",
            json!({ "image_url": raw }),
        )),
    }
}
