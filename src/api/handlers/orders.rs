//! Handler for checkout order creation.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::orders::{CreateOrderRequest, CreateOrderResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a gateway order for the browser checkout.
///
/// # Endpoint
///
/// `POST /api/orders`
///
/// # Request Body
///
/// ```json
/// { "amount": 50000 }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "order_id": "order_IluGWxBm9U8zJ8",
///   "amount": 50000,
///   "currency": "INR",
///   "key_id": "rzp_test_..."
/// }
/// ```
///
/// # Errors
///
/// Returns 400 if the amount is out of range, 502 if the gateway fails.
pub async fn create_order_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<CreateOrderResponse>), AppError> {
    payload.validate()?;

    let order = state.payment_service.create_order(payload.amount).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateOrderResponse {
            order_id: order.id,
            amount: order.amount,
            currency: order.currency,
            key_id: state.razorpay_key_id.to_string(),
        }),
    ))
}
