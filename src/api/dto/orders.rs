//! DTOs for checkout order creation.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for `POST /api/orders`.
///
/// `amount` is in paise: 1 to 500,000 rupees.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateOrderRequest {
    #[validate(range(min = 100, max = 50_000_000, message = "Amount must be 100-50000000 paise"))]
    pub amount: u64,
}

/// Everything the browser checkout needs to open the payment form.
#[derive(Debug, Serialize)]
pub struct CreateOrderResponse {
    pub order_id: String,
    pub amount: u64,
    pub currency: String,
    pub key_id: String,
}
