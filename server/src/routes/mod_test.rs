use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

use super::*;

fn test_app() -> Router {
    with_layers(site_routes().route("/dashboard", get(|| async { "dashboard" })))
}

#[tokio::test]
async fn healthz_returns_ok_without_session() {
    let response = test_app()
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn dashboard_without_session_redirects_to_login() {
    let response = test_app()
        .oneshot(Request::builder().uri("/dashboard").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/login");
}

#[tokio::test]
async fn dashboard_with_cookie_passes_through() {
    let request = Request::builder()
        .uri("/dashboard")
        .header(header::COOKIE, "theme=dark; token=abc123")
        .body(Body::empty())
        .unwrap();
    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
