//! Core domain entities.
//!
//! # Entity Types
//!
//! - [`Campaign`] - A fundraising drive stored in PostgreSQL
//! - [`UserProfile`] - An organization or player profile loaded from static data
//! - [`Order`] - A checkout order acknowledged by the payment gateway
//! - [`LinkedAccountRequest`] - Onboarding details of a campaign owner
//!
//! Creation inputs use separate structs (`NewCampaign`, `NewOrder`).

pub mod campaign;
pub mod linked_account;
pub mod order;
pub mod profile;

pub use campaign::{Campaign, NewCampaign};
pub use linked_account::{
    LinkedAccount, LinkedAccountRequest, OnboardingField, OnboardingResult, ProductConfiguration,
    SettlementDetails, Stakeholder,
};
pub use order::{CallbackPayload, NewOrder, Order};
pub use profile::{ProfileKind, ProfileTag, UserProfile};
