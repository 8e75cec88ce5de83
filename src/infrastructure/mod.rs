//! Infrastructure layer for external integrations.
//!
//! Implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`gateway`] - Razorpay REST client
//! - [`persistence`] - PostgreSQL repository implementations
//! - [`profiles`] - Static profile data loading

pub mod gateway;
pub mod persistence;
pub mod profiles;
