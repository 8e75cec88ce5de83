//! Business logic services for the application layer.

pub mod campaign_service;
pub mod payment_service;
pub mod profile_service;

pub use campaign_service::CampaignService;
pub use payment_service::PaymentService;
pub use profile_service::ProfileService;
