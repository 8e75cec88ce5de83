//! DTOs for profile endpoints.
//!
//! Profile JSON keeps the camelCase keys of the profile data files.

use serde::Serialize;

use crate::domain::entities::{ProfileKind, ProfileTag, UserProfile};
use crate::domain::video_id::VideoId;

/// Listing entry for `GET /api/profiles`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSummary<'a> {
    pub id: i64,
    pub slug: &'a str,
    pub name: &'a str,
    pub short_description: &'a str,
    pub image_url: &'a str,
    #[serde(rename = "type")]
    pub kind: ProfileKind,
    pub tag: ProfileTag,
    pub video_id: Option<VideoId>,
}

impl<'a> ProfileSummary<'a> {
    pub fn new(profile: &'a UserProfile, video_id: Option<VideoId>) -> Self {
        Self {
            id: profile.id,
            slug: &profile.slug,
            name: &profile.name,
            short_description: &profile.short_description,
            image_url: &profile.image_url,
            kind: profile.kind,
            tag: profile.tag,
            video_id,
        }
    }
}

/// Full profile for `GET /api/profiles/{slug}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDetail<'a> {
    #[serde(flatten)]
    pub profile: &'a UserProfile,
    pub video_id: Option<VideoId>,
    pub embed_url: Option<String>,
}

impl<'a> ProfileDetail<'a> {
    pub fn new(profile: &'a UserProfile, video_id: Option<VideoId>) -> Self {
        let embed_url = video_id.as_ref().map(VideoId::embed_url);
        Self {
            profile,
            video_id,
            embed_url,
        }
    }
}
