//! Repository trait for campaign data access.

use crate::domain::entities::{Campaign, NewCampaign};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for campaigns.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCampaignRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CampaignRepository: Send + Sync {
    /// Inserts a campaign and returns the stored row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_campaign: NewCampaign) -> Result<Campaign, AppError>;

    /// Finds a campaign by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Campaign))` if found
    /// - `Ok(None)` if not found
    async fn find_by_id(&self, id: i32) -> Result<Option<Campaign>, AppError>;

    /// Lists campaigns newest first.
    ///
    /// # Arguments
    ///
    /// - `offset` - Number of rows to skip
    /// - `limit` - Maximum number of rows to return
    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Campaign>, AppError>;

    /// Counts all campaigns.
    async fn count(&self) -> Result<i64, AppError>;
}
