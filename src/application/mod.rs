//! Application layer services implementing business logic.
//!
//! Services consume domain traits (repositories, the payment gateway) and
//! expose the operations HTTP handlers and the admin CLI call.
//!
//! # Available Services
//!
//! - [`services::campaign_service::CampaignService`] - Campaign creation and listing
//! - [`services::profile_service::ProfileService`] - Profile lookup and video resolution
//! - [`services::payment_service::PaymentService`] - Orders, callbacks and onboarding

pub mod services;
