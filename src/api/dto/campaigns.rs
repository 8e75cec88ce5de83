//! DTOs for campaign endpoints.

use serde::Serialize;

use crate::domain::entities::Campaign;

/// One page of campaigns.
#[derive(Debug, Serialize)]
pub struct CampaignListResponse {
    pub items: Vec<Campaign>,
    pub total: i64,
    pub page: u32,
    pub page_size: u32,
}
