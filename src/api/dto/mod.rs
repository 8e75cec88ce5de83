//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation.

pub mod callback;
pub mod campaigns;
pub mod health;
pub mod orders;
pub mod pagination;
pub mod profiles;
