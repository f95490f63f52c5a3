//! Shared fixtures for the HTTP workflow tests.

use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, HeaderMap, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use debate_analyst::config::{ApiKey, Config};
use debate_analyst::server::{router, AppState};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const SOLAR: &str = "Solar power is always cheaper than coal.";

/// Router wired to `server`, with a key configured.
pub fn app(server: &MockServer) -> Router {
    let config = Config::default()
        .with_api_key(ApiKey::new("test-key"))
        .with_gateway_url(server.uri());
    router(AppState::from_config(&config).unwrap())
}

/// Router wired to `server`, without a key.
pub fn app_without_key(server: &MockServer) -> Router {
    let config = Config::default().with_gateway_url(server.uri());
    router(AppState::from_config(&config).unwrap())
}

/// OpenAI-style completion envelope carrying `content`.
pub fn completion(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 100, "completion_tokens": 50}
    })
}

/// Mount a single expected upstream reply.
pub async fn mount_upstream(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(template)
        .expect(1)
        .mount(server)
        .await;
}

/// Assert the upstream is never contacted.
pub async fn forbid_upstream(server: &MockServer) {
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(server)
        .await;
}

pub fn analyze_request(body: &Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/analyze-debate")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn read(response: Response) -> (StatusCode, HeaderMap, Vec<u8>) {
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, headers, bytes.to_vec())
}

pub async fn read_json(response: Response) -> (StatusCode, HeaderMap, Value) {
    let (status, headers, bytes) = read(response).await;
    (status, headers, serde_json::from_slice(&bytes).unwrap())
}

/// A well-formed analysis of [`SOLAR`].
pub fn solar_analysis() -> Value {
    json!({
        "fact_checks": [{
            "claim": SOLAR,
            "status": "unverified",
            "explanation": "Costs depend on region and storage.",
            "confidence": 0.6
        }],
        "fallacies": [{
            "name": "Hasty Generalization",
            "explanation": "\"Always\" overreaches."
        }],
        "argument_analysis": {
            "strength": "weak",
            "key_points": ["Solar beats coal on cost"],
            "suggestions": ["Cite levelized cost figures"]
        }
    })
}
