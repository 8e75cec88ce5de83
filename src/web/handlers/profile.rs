//! Profile page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};

use crate::application::services::ProfileService;
use crate::domain::entities::UserProfile;
use crate::error::AppError;
use crate::state::AppState;

/// Template for a single profile.
///
/// `embed_url` is set only when the profile's video reference resolves to a
/// valid id; the template omits the player otherwise.
#[derive(Template, WebTemplate)]
#[template(path = "profile.html")]
pub struct ProfileTemplate {
    pub profile: UserProfile,
    pub embed_url: Option<String>,
}

/// Renders a profile page.
///
/// # Endpoint
///
/// `GET /users/{slug}`
///
/// # Errors
///
/// Returns 404 if no profile has this slug.
pub async fn profile_page_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<ProfileTemplate, AppError> {
    let profile = state.profile_service.get(&slug)?;
    let embed_url = ProfileService::video_id(profile).map(|id| id.embed_url());

    Ok(ProfileTemplate {
        profile: profile.clone(),
        embed_url,
    })
}
