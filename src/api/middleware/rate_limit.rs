//! Rate limiting middleware using token bucket algorithm.
//!
//! Limits are applied per client IP taken from the socket peer address, so
//! the service must be served with
//! `into_make_service_with_connect_info::<SocketAddr>()`.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

type PeerIpGovernor =
    GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Creates a rate limiter for public read endpoints and pages.
///
/// # Limits
///
/// - **Rate**: 2 requests per second
/// - **Burst**: 100 requests
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
pub fn layer() -> PeerIpGovernor {
    governor_layer(2, 100)
}

/// Creates a stricter rate limiter for payment and onboarding endpoints.
///
/// # Limits
///
/// - **Rate**: 1 request per second
/// - **Burst**: 10 requests
///
/// # Example
///
/// ```rust,ignore
/// let payment_routes = Router::new()
///     .route("/orders", post(create_order_handler))
///     .layer(rate_limit::secure_layer());
/// ```
pub fn secure_layer() -> PeerIpGovernor {
    governor_layer(1, 10)
}

fn governor_layer(per_second: u64, burst_size: u32) -> PeerIpGovernor {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(per_second)
            .burst_size(burst_size)
            .finish()
            .expect("rate and burst are non-zero"),
    );

    GovernorLayer::new(governor_conf)
}
