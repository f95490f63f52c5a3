//! End-to-end analysis requests.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::common::{
    analyze_request, app, completion, mount_upstream, read, read_json, solar_analysis, SOLAR,
};

#[tokio::test]
async fn test_analyze_returns_upstream_object() {
    let server = MockServer::start().await;
    mount_upstream(
        &server,
        ResponseTemplate::new(200).set_body_json(completion(&solar_analysis().to_string())),
    )
    .await;

    let response = app(&server)
        .oneshot(analyze_request(&json!({"message": SOLAR, "type": "analyze"})))
        .await
        .unwrap();

    let (status, _, body) = read_json(response).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, solar_analysis());
}

#[tokio::test]
async fn test_unmodelled_fields_returned_byte_for_byte() {
    let upstream = r#"{"fact_checks":[{"claim":"Solar power is always cheaper than coal.","status":"partially true","explanation":"Depends on storage.","confidence":0.6,"source":"IEA 2024"}],"fallacies":[{"name":"Hasty Generalization","explanation":"\"Always\" overreaches.","severity":"high"}],"argument_analysis":{"strength":"weak","key_points":[],"suggestions":[]},"overall_score":3}"#;
    let server = MockServer::start().await;
    mount_upstream(
        &server,
        ResponseTemplate::new(200).set_body_json(completion(upstream)),
    )
    .await;

    let response = app(&server)
        .oneshot(analyze_request(&json!({"message": SOLAR, "type": "analyze"})))
        .await
        .unwrap();

    let (status, _, body) = read(response).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(String::from_utf8(body).unwrap(), upstream);
}

#[tokio::test]
async fn test_prose_with_embedded_object_degrades() {
    let prose = r#"I cannot analyze this. Expected input looks like {"message": "..."}."#;
    let server = MockServer::start().await;
    mount_upstream(
        &server,
        ResponseTemplate::new(200).set_body_json(completion(prose)),
    )
    .await;

    let response = app(&server)
        .oneshot(analyze_request(&json!({"message": SOLAR})))
        .await
        .unwrap();

    let (status, _, body) = read_json(response).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "fact_checks": [],
            "fallacies": [],
            "argument_analysis": {
                "strength": "moderate",
                "key_points": [],
                "suggestions": [prose]
            }
        })
    );
}

#[tokio::test]
async fn test_request_shape_sent_upstream() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(json!({
            "model": "google/gemini-2.5-flash",
            "temperature": 0.3
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("{}")))
        .expect(1)
        .mount(&server)
        .await;

    let response = app(&server)
        .oneshot(analyze_request(&json!({"message": SOLAR})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let requests = server.received_requests().await.unwrap();
    let sent: Value = serde_json::from_slice(&requests[0].body).unwrap();
    let messages = sent["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["role"], "system");
    assert_eq!(messages[1]["role"], "user");
    assert_eq!(
        messages[1]["content"],
        format!("Analyze this message:\n\n\"{SOLAR}\"")
    );
}

#[tokio::test]
async fn test_devils_advocate_context_reaches_prompt() {
    let server = MockServer::start().await;
    let reply = json!({
        "fact_checks": [],
        "fallacies": [],
        "argument_analysis": {"strength": "moderate", "key_points": [], "suggestions": []},
        "counter_argument": "Grid storage costs erase the gap."
    });
    mount_upstream(
        &server,
        ResponseTemplate::new(200).set_body_json(completion(&reply.to_string())),
    )
    .await;

    let response = app(&server)
        .oneshot(analyze_request(&json!({
            "message": SOLAR,
            "type": "devils_advocate",
            "debateContext": "Energy policy"
        })))
        .await
        .unwrap();

    let (status, _, body) = read_json(response).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["counter_argument"], "Grid storage costs erase the gap.");
    assert!(body.get("summary").is_none());

    let requests = server.received_requests().await.unwrap();
    let sent: Value = serde_json::from_slice(&requests[0].body).unwrap();
    let user = sent["messages"][1]["content"].as_str().unwrap();
    assert!(user.starts_with("Generate a devil's advocate counter-argument for:"));
    assert!(user.ends_with("Context: Energy policy"));
}

#[tokio::test]
async fn test_fenced_reply_is_unwrapped() {
    let server = MockServer::start().await;
    let fenced = format!("```json\n{}\n```", solar_analysis());
    mount_upstream(
        &server,
        ResponseTemplate::new(200).set_body_json(completion(&fenced)),
    )
    .await;

    let response = app(&server)
        .oneshot(analyze_request(&json!({"message": SOLAR, "type": "analyze"})))
        .await
        .unwrap();

    let (status, _, body) = read_json(response).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, solar_analysis());
}

#[tokio::test]
async fn test_prose_reply_degrades() {
    let server = MockServer::start().await;
    mount_upstream(
        &server,
        ResponseTemplate::new(200).set_body_json(completion("I cannot analyze this.")),
    )
    .await;

    let response = app(&server)
        .oneshot(analyze_request(&json!({"message": SOLAR, "type": "summarize"})))
        .await
        .unwrap();

    let (status, _, body) = read_json(response).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "fact_checks": [],
            "fallacies": [],
            "argument_analysis": {
                "strength": "moderate",
                "key_points": [],
                "suggestions": ["I cannot analyze this."]
            }
        })
    );
}

#[tokio::test]
async fn test_missing_choice_content_degrades_to_empty_suggestion() {
    let server = MockServer::start().await;
    mount_upstream(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"id": "chatcmpl-empty", "choices": []})),
    )
    .await;

    let response = app(&server)
        .oneshot(analyze_request(&json!({"message": SOLAR})))
        .await
        .unwrap();

    let (status, _, body) = read_json(response).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["argument_analysis"]["suggestions"], json!([""]));
}
