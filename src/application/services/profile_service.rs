//! Profile lookup service.

use serde_json::json;

use crate::domain::entities::UserProfile;
use crate::domain::video_id::VideoId;
use crate::error::AppError;
use crate::utils::youtube::extract_video_id;

/// Read-only access to the profiles loaded at startup.
pub struct ProfileService {
    profiles: Vec<UserProfile>,
}

impl ProfileService {
    pub fn new(profiles: Vec<UserProfile>) -> Self {
        Self { profiles }
    }

    /// All profiles in file order.
    pub fn list(&self) -> &[UserProfile] {
        &self.profiles
    }

    /// Finds a profile by slug.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no profile has this slug.
    pub fn get(&self, slug: &str) -> Result<&UserProfile, AppError> {
        self.profiles
            .iter()
            .find(|p| p.slug == slug)
            .ok_or_else(|| AppError::not_found("Profile not found", json!({ "slug": slug })))
    }

    /// Resolves the profile's video reference to an embeddable id, if valid.
    pub fn video_id(profile: &UserProfile) -> Option<VideoId> {
        extract_video_id(profile.yt_video.as_deref())
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
