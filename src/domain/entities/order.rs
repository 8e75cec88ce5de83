//! Checkout order entities.

use serde::{Deserialize, Serialize};

/// Input for creating a gateway order.
///
/// `amount` is in the currency's smallest unit (paise for INR).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewOrder {
    pub amount: u64,
    pub currency: String,
    pub receipt: String,
}

/// An order as acknowledged by the payment gateway.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Order {
    pub id: String,
    pub amount: u64,
    pub currency: String,
    #[serde(default)]
    pub receipt: Option<String>,
    pub status: String,
}

/// Fields posted back by the checkout once the payer completes payment.
///
/// Every field is optional on the wire; absence is an authentication failure,
/// not a parse failure.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CallbackPayload {
    #[serde(rename = "razorpay_order_id")]
    pub order_id: Option<String>,
    #[serde(rename = "razorpay_payment_id")]
    pub payment_id: Option<String>,
    #[serde(rename = "razorpay_signature")]
    pub signature: Option<String>,
}
