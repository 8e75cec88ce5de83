//! Stateless helpers used across the application.
//!
//! - [`youtube`] - Video ID extraction from user-supplied references
//! - [`signature`] - Payment callback signature verification
//! - [`receipt`] - Receipt id generation for gateway orders

pub mod receipt;
pub mod signature;
pub mod youtube;
