//! Website route configuration.

use crate::state::AppState;
use crate::web::handlers::{home_handler, payment_handler, profile_page_handler};
use axum::{Router, routing::get};

/// Public pages.
///
/// # Endpoints
///
/// - `GET /`              - Profile directory
/// - `GET /users/{slug}`  - Profile page with optional video embed
/// - `GET /payment`       - Donation checkout
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler))
        .route("/users/{slug}", get(profile_page_handler))
        .route("/payment", get(payment_handler))
}
