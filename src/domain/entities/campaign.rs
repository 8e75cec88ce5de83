//! Campaign entity representing a fundraising drive.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A fundraising campaign shown on the site.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Campaign {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Campaign {
    /// Creates a new Campaign instance.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let campaign = Campaign::new(
    ///     1,
    ///     "Nets for Ladakh".to_string(),
    ///     "Replacing worn-out nets at three village courts".to_string(),
    ///     None,
    ///     Utc::now(),
    ///     None,
    /// );
    /// ```
    pub fn new(
        id: i32,
        title: String,
        description: String,
        image_url: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            title,
            description,
            image_url,
            created_at,
            updated_at,
        }
    }
}

/// Input data for creating a new campaign.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCampaign {
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
}
