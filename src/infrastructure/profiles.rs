//! Static profile data loading.

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::Path;

use crate::domain::entities::UserProfile;

/// Reads the profile list from a JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not a JSON array of
/// profiles, or contains duplicate slugs.
pub fn load_profiles(path: impl AsRef<Path>) -> Result<Vec<UserProfile>> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read profiles from {}", path.display()))?;

    parse_profiles(&raw).with_context(|| format!("Invalid profile data in {}", path.display()))
}

/// Parses and checks a JSON profile list.
pub fn parse_profiles(raw: &str) -> Result<Vec<UserProfile>> {
    let profiles: Vec<UserProfile> = serde_json::from_str(raw)?;

    let mut seen = HashSet::new();
    for profile in &profiles {
        if !seen.insert(profile.slug.as_str()) {
            anyhow::bail!("Duplicate profile slug '{}'", profile.slug);
        }
    }

    Ok(profiles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn profile(id: i64, slug: &str) -> serde_json::Value {
        json!({
            "id": id,
            "slug": slug,
            "name": "Club",
            "shortDescription": "A club",
            "imageUrl": "/img/club.jpg",
            "type": "individual",
            "tag": "CURATED",
            "founder": {
                "name": "A",
                "title": "Coach",
                "imageUrl": "/img/a.jpg",
                "quote": { "text": "Play on.", "attribution": "A" }
            },
            "sections": {
                "ourMission": { "heading": "Mission" },
                "whatWeDo": { "heading": "Work" },
                "supportUs": { "heading": "Support" }
            }
        })
    }

    #[test]
    fn test_parse_profiles() {
        let raw = json!([profile(1, "a"), profile(2, "b")]).to_string();
        let profiles = parse_profiles(&raw).unwrap();
        assert_eq!(profiles.len(), 2);
    }

    #[test]
    fn test_duplicate_slug_rejected() {
        let raw = json!([profile(1, "a"), profile(2, "a")]).to_string();
        let err = parse_profiles(&raw).unwrap_err();
        assert!(err.to_string().contains("Duplicate profile slug"));
    }

    #[test]
    fn test_not_an_array_rejected() {
        assert!(parse_profiles("{}").is_err());
    }

    #[test]
    fn test_missing_file() {
        assert!(load_profiles("/nonexistent/profiles.json").is_err());
    }

    #[test]
    fn test_bundled_profiles_load() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/profiles.json");
        let profiles = load_profiles(path).unwrap();
        assert!(!profiles.is_empty());
    }
}
