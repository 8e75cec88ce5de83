//! Donation checkout page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use axum::response::IntoResponse;

use crate::state::AppState;

/// Template for the checkout page.
///
/// The page script creates an order through `POST /api/orders`, opens the
/// gateway checkout and forwards the result to `POST /api/razorpay`.
#[derive(Template, WebTemplate)]
#[template(path = "payment.html")]
pub struct PaymentTemplate {
    pub currency: String,
}

/// Renders the checkout page.
///
/// # Endpoint
///
/// `GET /payment`
pub async fn payment_handler(State(state): State<AppState>) -> impl IntoResponse {
    PaymentTemplate {
        currency: state.payment_service.currency().to_string(),
    }
}
