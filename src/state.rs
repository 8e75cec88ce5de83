//! Shared application state handed to every handler.

use std::sync::Arc;

use crate::application::services::{CampaignService, PaymentService, ProfileService};
use crate::domain::gateway::PaymentGateway;
use crate::domain::repositories::CampaignRepository;

/// Services and settings shared across requests.
///
/// Built once at startup; cloning only bumps reference counts.
#[derive(Clone)]
pub struct AppState {
    pub campaign_service: Arc<CampaignService<dyn CampaignRepository>>,
    pub profile_service: Arc<ProfileService>,
    pub payment_service: Arc<PaymentService<dyn PaymentGateway>>,
    /// Public gateway key id, handed to the browser checkout.
    pub razorpay_key_id: Arc<str>,
}

impl AppState {
    pub fn new(
        campaign_repository: Arc<dyn CampaignRepository>,
        gateway: Arc<dyn PaymentGateway>,
        profile_service: ProfileService,
        razorpay_key_id: &str,
        razorpay_key_secret: &str,
        currency: &str,
    ) -> Self {
        Self {
            campaign_service: Arc::new(CampaignService::new(campaign_repository)),
            profile_service: Arc::new(profile_service),
            payment_service: Arc::new(PaymentService::new(
                gateway,
                razorpay_key_secret,
                currency,
            )),
            razorpay_key_id: Arc::from(razorpay_key_id),
        }
    }
}
