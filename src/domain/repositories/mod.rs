//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for unit tests.

pub mod campaign_repository;

pub use campaign_repository::CampaignRepository;

#[cfg(test)]
pub use campaign_repository::MockCampaignRepository;
