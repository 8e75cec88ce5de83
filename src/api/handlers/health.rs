//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Database**: Counts stored campaigns
/// 2. **Profiles**: At least one profile is loaded
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "database": { "status": "ok", "message": "Connected, 4 campaigns" },
///     "profiles": { "status": "ok", "message": "3 profiles loaded" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let db_check = check_database(&state).await;
    let profiles_check = check_profiles(&state);

    let all_healthy = db_check.is_ok() && profiles_check.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            database: db_check,
            profiles: profiles_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_database(state: &AppState) -> CheckStatus {
    match state.campaign_service.count_campaigns().await {
        Ok(count) => CheckStatus::ok(format!("Connected, {count} campaigns")),
        Err(e) => CheckStatus::error(format!("Database error: {e}")),
    }
}

fn check_profiles(state: &AppState) -> CheckStatus {
    if state.profile_service.is_empty() {
        CheckStatus::error("No profiles loaded")
    } else {
        CheckStatus::ok(format!("{} profiles loaded", state.profile_service.len()))
    }
}
