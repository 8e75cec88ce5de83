//! Organization and player profiles rendered on the public site.
//!
//! Profiles are curated static data, not database rows. The JSON shape uses
//! camelCase keys so existing profile files load unchanged.

use serde::{Deserialize, Serialize};

/// Whether a profile represents an organization or a single person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileKind {
    Org,
    Individual,
}

impl ProfileKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Org => "Organization",
            Self::Individual => "Individual",
        }
    }
}

/// How a profile got onto the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProfileTag {
    Curated,
    Verified,
    SelfHosted,
}

impl ProfileTag {
    /// Badge text shown on profile cards.
    pub fn label(self) -> &'static str {
        match self {
            Self::Curated => "Curated",
            Self::Verified => "Verified",
            Self::SelfHosted => "Self-hosted",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub attribution: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Founder {
    pub name: String,
    pub title: String,
    pub image_url: String,
    #[serde(default)]
    pub bio: Vec<String>,
    pub quote: Quote,
}

/// A titled block of copy, optionally with a list of items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section<T> {
    pub heading: String,
    #[serde(default = "Vec::new", skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<T>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub paragraphs: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One activity listed under "What We Do".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub title: String,
    pub description: String,
}

/// Copy blocks of a profile page. Sections without items use `()` as the item type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSections {
    pub our_mission: Section<()>,
    pub what_we_do: Section<Activity>,
    pub support_us: Section<()>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: i64,
    pub slug: String,
    pub name: String,
    pub short_description: String,
    /// Whatever video reference the owner supplied; may be empty or malformed.
    #[serde(default)]
    pub yt_video: Option<String>,
    pub image_url: String,
    #[serde(rename = "type")]
    pub kind: ProfileKind,
    pub tag: ProfileTag,
    #[serde(default)]
    pub website_url: Option<String>,
    #[serde(default)]
    pub social: SocialLinks,
    pub founder: Founder,
    pub sections: ProfileSections,
}
