//! Handler for the checkout payment callback.

use axum::{
    Form, Json,
    extract::{State, rejection::FormRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::api::dto::callback::{CallbackAccepted, CallbackRejected};
use crate::domain::entities::CallbackPayload;
use crate::state::AppState;

/// Verifies the signature the checkout posts after a payment.
///
/// # Endpoint
///
/// `POST /api/razorpay` (form-encoded `razorpay_order_id`,
/// `razorpay_payment_id`, `razorpay_signature`)
///
/// # Response Codes
///
/// - **200 OK**: `{"msg":"success","orderId":"...","paymentId":"..."}`
/// - **400 Bad Request**: `{"msg":"Transaction is not legit!"}` for a bad
///   signature, missing fields or an unreadable body
pub async fn razorpay_callback_handler(
    State(state): State<AppState>,
    form: Result<Form<CallbackPayload>, FormRejection>,
) -> Response {
    let payload = match form {
        Ok(Form(payload)) => payload,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Unreadable payment callback body");
            CallbackPayload::default()
        }
    };

    if !state.payment_service.verify_callback(&payload).is_authentic() {
        return (StatusCode::BAD_REQUEST, Json(CallbackRejected::default())).into_response();
    }

    let CallbackPayload {
        order_id,
        payment_id,
        ..
    } = payload;

    Json(CallbackAccepted::new(
        order_id.unwrap_or_default(),
        payment_id.unwrap_or_default(),
    ))
    .into_response()
}
