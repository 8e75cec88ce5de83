//! Handlers for campaign endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde_json::json;

use crate::api::dto::campaigns::CampaignListResponse;
use crate::api::dto::pagination::PaginationParams;
use crate::domain::entities::Campaign;
use crate::error::AppError;
use crate::state::AppState;

/// Lists campaigns, newest first.
///
/// # Endpoint
///
/// `GET /api/campaigns?page=1&page_size=25`
///
/// # Errors
///
/// Returns 400 if `page` is 0 or `page_size` is outside 1-100.
pub async fn campaign_list_handler(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<CampaignListResponse>, AppError> {
    let page = params
        .validate()
        .map_err(|e| AppError::bad_request(e, json!({})))?;

    let (items, total) = state
        .campaign_service
        .list_campaigns(page.offset(), page.limit())
        .await?;

    Ok(Json(CampaignListResponse {
        items,
        total,
        page: page.page,
        page_size: page.page_size,
    }))
}

/// Returns a single campaign.
///
/// # Endpoint
///
/// `GET /api/campaigns/{id}`
///
/// # Errors
///
/// Returns 404 if the campaign does not exist.
pub async fn campaign_handler(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Campaign>, AppError> {
    let campaign = state.campaign_service.get_campaign(id).await?;
    Ok(Json(campaign))
}
