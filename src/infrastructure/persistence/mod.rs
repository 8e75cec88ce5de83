//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//!
//! # Repositories
//!
//! - [`PgCampaignRepository`] - Campaign storage and retrieval

pub mod pg_campaign_repository;

pub use pg_campaign_repository::PgCampaignRepository;
