//! Handlers for profile endpoints.

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::api::dto::profiles::{ProfileDetail, ProfileSummary};
use crate::application::services::ProfileService;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all profiles with their resolved video ids.
///
/// # Endpoint
///
/// `GET /api/profiles`
pub async fn profile_list_handler(State(state): State<AppState>) -> Response {
    let summaries: Vec<_> = state
        .profile_service
        .list()
        .iter()
        .map(|p| ProfileSummary::new(p, ProfileService::video_id(p)))
        .collect();

    Json(summaries).into_response()
}

/// Returns one profile by slug.
///
/// # Endpoint
///
/// `GET /api/profiles/{slug}`
///
/// `videoId` and `embedUrl` are `null` when the profile's video reference
/// does not resolve to a valid id.
///
/// # Errors
///
/// Returns 404 if no profile has this slug.
pub async fn profile_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Response, AppError> {
    let profile = state.profile_service.get(&slug)?;
    let detail = ProfileDetail::new(profile, ProfileService::video_id(profile));

    Ok(Json(detail).into_response())
}
