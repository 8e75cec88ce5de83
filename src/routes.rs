//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /`               - Profile directory (public)
//! - `GET  /users/{slug}`   - Profile page (public)
//! - `GET  /payment`        - Donation checkout (public)
//! - `GET  /health`         - Health check: database, profiles
//! - `/api/*`               - REST API
//! - `/static/*`            - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket; stricter on payment routes
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Directory served under `/static`.
const STATIC_DIR: &str = "static";

/// Constructs the application router with all routes and middleware.
///
/// The returned service must be served with peer address connect info for
/// the rate limiters to identify clients.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let api_router = Router::new()
        .merge(api::routes::public_routes().layer(rate_limit::layer()))
        .merge(api::routes::payment_routes().layer(rate_limit::secure_layer()));

    let web_router = web::routes::routes().layer(rate_limit::layer());

    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .merge(web_router)
        .nest_service("/static", ServeDir::new(STATIC_DIR))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
