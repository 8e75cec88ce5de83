//! API route configuration.

use crate::api::handlers::{
    campaign_handler, campaign_list_handler, create_account_handler, create_order_handler,
    profile_handler, profile_list_handler, razorpay_callback_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Read-only API routes.
///
/// # Endpoints
///
/// - `GET /campaigns`         - Campaigns, newest first (paginated)
/// - `GET /campaigns/{id}`    - Single campaign
/// - `GET /profiles`          - Profile summaries with video ids
/// - `GET /profiles/{slug}`   - Full profile
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/campaigns", get(campaign_list_handler))
        .route("/campaigns/{id}", get(campaign_handler))
        .route("/profiles", get(profile_list_handler))
        .route("/profiles/{slug}", get(profile_handler))
}

/// Routes that reach the payment gateway or authenticate its callbacks.
///
/// # Endpoints
///
/// - `POST /orders`   - Create a checkout order
/// - `POST /razorpay` - Payment callback (form-encoded)
/// - `POST /accounts` - Linked-account onboarding
pub fn payment_routes() -> Router<AppState> {
    Router::new()
        .route("/orders", post(create_order_handler))
        .route("/razorpay", post(razorpay_callback_handler))
        .route("/accounts", post(create_account_handler))
}
