//! Responses for the payment callback endpoint.

use serde::Serialize;

/// Body returned when the callback signature checks out.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallbackAccepted {
    pub msg: &'static str,
    pub order_id: String,
    pub payment_id: String,
}

impl CallbackAccepted {
    pub fn new(order_id: String, payment_id: String) -> Self {
        Self {
            msg: "success",
            order_id,
            payment_id,
        }
    }
}

/// Body returned when the callback is rejected.
#[derive(Debug, Serialize)]
pub struct CallbackRejected {
    pub msg: &'static str,
}

impl Default for CallbackRejected {
    fn default() -> Self {
        Self {
            msg: "Transaction is not legit!",
        }
    }
}
