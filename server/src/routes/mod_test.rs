use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use super::*;

fn test_config() -> ServerConfig {
    ServerConfig {
        bind_addr: std::net::IpAddr::from([127, 0, 0, 1]),
        port: 0,
        assets_dir: std::env::temp_dir().join("site-server-test-assets"),
        consultation_api_base: None,
    }
}

#[tokio::test]
async fn healthz_returns_ok() {
    let response = base_routes(&test_config())
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn missing_image_is_not_found() {
    let response = base_routes(&test_config())
        .oneshot(Request::builder().uri("/images/none.jpg").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let response = base_routes(&test_config())
        .oneshot(Request::builder().uri("/api/project-consultation").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[test]
fn shell_api_base_uses_configured_value() {
    let config = ServerConfig {
        consultation_api_base: Some("https://api.example.com".to_owned()),
        ..test_config()
    };
    assert_eq!(shell_api_base(&config), "https://api.example.com");
}

#[test]
fn shell_api_base_falls_back_without_configuration() {
    assert_eq!(shell_api_base(&test_config()), resolve_base_url(None));
}
