mod common;

use axum::body::Body;
use axum::extract::ConnectInfo;
use axum::http::{Method, Request, StatusCode};
use std::net::SocketAddr;
use tower::ServiceExt;
use volley_fund::routes::app_router;

fn request(method: Method, uri: &str, peer: SocketAddr) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .extension(ConnectInfo(peer))
        .body(Body::empty())
        .unwrap()
}

fn peer(last_octet: u8) -> SocketAddr {
    SocketAddr::from(([10, 0, 0, last_octet], 40000))
}

#[tokio::test]
async fn test_trailing_slash_is_normalized() {
    let app = app_router(common::create_test_state());

    let response = app
        .clone()
        .oneshot(request(Method::GET, "/api/profiles/", peer(1)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(request(Method::GET, "/health/", peer(1)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_pages_and_static_assets_are_served() {
    let app = app_router(common::create_test_state());

    for uri in ["/", "/users/spikers-trust", "/payment", "/static/site.css"] {
        let response = app
            .clone()
            .oneshot(request(Method::GET, uri, peer(2)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK, "GET {uri}");
    }
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = app_router(common::create_test_state());

    let response = app
        .oneshot(request(Method::GET, "/api/unknown", peer(3)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_payment_routes_use_strict_rate_limit() {
    let app = app_router(common::create_test_state());

    for _ in 0..10 {
        let response = app
            .clone()
            .oneshot(request(Method::POST, "/api/razorpay", peer(4)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    let response = app
        .clone()
        .oneshot(request(Method::POST, "/api/razorpay", peer(4)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);

    let response = app
        .oneshot(request(Method::POST, "/api/razorpay", peer(5)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
