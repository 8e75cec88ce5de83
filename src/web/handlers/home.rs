//! Profile directory page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use axum::response::IntoResponse;

use crate::domain::entities::UserProfile;
use crate::state::AppState;

/// Template for the landing page listing every profile.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub profiles: Vec<UserProfile>,
}

/// Renders the profile directory.
///
/// # Endpoint
///
/// `GET /`
pub async fn home_handler(State(state): State<AppState>) -> impl IntoResponse {
    HomeTemplate {
        profiles: state.profile_service.list().to_vec(),
    }
}
