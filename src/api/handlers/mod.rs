//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod accounts;
pub mod callback;
pub mod campaigns;
pub mod health;
pub mod orders;
pub mod profiles;

pub use accounts::create_account_handler;
pub use callback::razorpay_callback_handler;
pub use campaigns::{campaign_handler, campaign_list_handler};
pub use health::health_handler;
pub use orders::create_order_handler;
pub use profiles::{profile_handler, profile_list_handler};
