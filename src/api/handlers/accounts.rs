//! Handler for linked-account onboarding.

use axum::{Json, extract::State, http::StatusCode};

use crate::domain::entities::{LinkedAccountRequest, OnboardingResult};
use crate::error::AppError;
use crate::state::AppState;

/// Registers a campaign owner with the gateway so donations can be routed
/// to their bank account.
///
/// # Endpoint
///
/// `POST /api/accounts`
///
/// # Sequence
///
/// 1. Create linked account
/// 2. Create stakeholder
/// 3. Request route product configuration
/// 4. Update product settlements
///
/// # Errors
///
/// Returns 400 if the request fails validation and 502 if any gateway step
/// fails. Steps that already succeeded are not undone.
pub async fn create_account_handler(
    State(state): State<AppState>,
    Json(request): Json<LinkedAccountRequest>,
) -> Result<(StatusCode, Json<OnboardingResult>), AppError> {
    let result = state.payment_service.onboard(&request).await?;
    Ok((StatusCode::CREATED, Json(result)))
}
