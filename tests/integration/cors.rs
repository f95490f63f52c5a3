//! CORS, preflight and health routes.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;
use tower::ServiceExt;
use wiremock::MockServer;

use super::common::{
    analyze_request, app, app_without_key, completion, mount_upstream, read, read_json, SOLAR,
};

fn options(extra: &[(&str, &str)]) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::OPTIONS)
        .uri("/analyze-debate");
    for (name, value) in extra {
        builder = builder.header(*name, *value);
    }
    builder.body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_plain_options_without_key() {
    let server = MockServer::start().await;

    let response = app_without_key(&server).oneshot(options(&[])).await.unwrap();

    let (status, _, body) = read(response).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_browser_preflight() {
    let server = MockServer::start().await;

    let response = app_without_key(&server)
        .oneshot(options(&[
            ("origin", "https://debates.example"),
            ("access-control-request-method", "POST"),
            ("access-control-request-headers", "authorization, x-client-info, apikey, content-type"),
        ]))
        .await
        .unwrap();

    let (status, headers, body) = read(response).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
    assert_eq!(headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(), "*");

    let allowed = headers
        .get(header::ACCESS_CONTROL_ALLOW_HEADERS)
        .unwrap()
        .to_str()
        .unwrap()
        .to_ascii_lowercase();
    for name in ["authorization", "x-client-info", "apikey", "content-type"] {
        assert!(allowed.contains(name), "{name} missing from {allowed}");
    }
}

#[tokio::test]
async fn test_cors_header_on_success_response() {
    let server = MockServer::start().await;
    mount_upstream(
        &server,
        wiremock::ResponseTemplate::new(200).set_body_json(completion("{}")),
    )
    .await;

    let mut request = analyze_request(&json!({"message": SOLAR}));
    request
        .headers_mut()
        .insert(header::ORIGIN, "https://debates.example".parse().unwrap());

    let response = app(&server).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_health_reports_gateway_configuration() {
    let server = MockServer::start().await;

    for (router, configured) in [(app(&server), true), (app_without_key(&server), false)] {
        let response = router
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let (status, _, body) = read_json(response).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(body["gateway_configured"], configured);
    }
}
