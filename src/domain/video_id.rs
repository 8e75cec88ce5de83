//! Validated YouTube video identifier.

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

/// Canonical YouTube video ID shape: 11 URL-safe base64 characters.
static VIDEO_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{11}$").unwrap());

/// An 11-character YouTube video identifier.
///
/// Can only be constructed through [`VideoId::parse`], so any value of this
/// type is safe to interpolate into an embed URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    /// Returns `Some` if `candidate` is exactly 11 characters of `[A-Za-z0-9_-]`.
    pub fn parse(candidate: &str) -> Option<Self> {
        VIDEO_ID_REGEX
            .is_match(candidate)
            .then(|| Self(candidate.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Player URL for an `<iframe>` embed.
    pub fn embed_url(&self) -> String {
        format!("https://www.youtube.com/embed/{}", self.0)
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VideoId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
