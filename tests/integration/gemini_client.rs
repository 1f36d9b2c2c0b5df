//! Gemini client against a local HTTP responder

use crate::integration::test_utils::{gemini_envelope, serve_once, unused_endpoint};
use seo_writer::error::{FallbackReason, ProviderError};
use seo_writer::provider::{GeminiClient, GenerationProvider};
use std::time::Duration;

fn client(endpoint: String) -> GeminiClient {
    GeminiClient::new(
        "gemini-1.5-flash".to_string(),
        "test-key".to_string(),
        Some(endpoint),
        Duration::from_secs(2),
        Duration::from_secs(10),
    )
    .unwrap()
}

#[tokio::test]
async fn posts_prompt_and_returns_first_part() {
    let (endpoint, server) = serve_once(200, gemini_envelope("{\"content\":\"hi\"}")).await;
    let client = client(endpoint);

    let reply = client.generate("Write about kefir").await.unwrap();
    let request = server.await.unwrap();

    assert_eq!(reply.as_str(), "{\"content\":\"hi\"}");
    assert!(request.starts_with(
        "POST /v1beta/models/gemini-1.5-flash:generateContent?key=test-key HTTP/1.1"
    ));

    let body_start = request.find("\r\n\r\n").unwrap() + 4;
    let body: serde_json::Value = serde_json::from_str(&request[body_start..]).unwrap();
    assert_eq!(body["contents"][0]["parts"][0]["text"], "Write about kefir");
    assert_eq!(body["generationConfig"]["maxOutputTokens"], 8000);
    assert_eq!(body["generationConfig"]["topK"], 40);
    let safety = body["safetySettings"].as_array().unwrap();
    assert_eq!(safety.len(), 4);
    assert!(safety.iter().all(|s| s["threshold"] == "BLOCK_NONE"));
}

#[tokio::test]
async fn error_status_carries_body() {
    let (endpoint, server) =
        serve_once(429, "{\"error\":{\"message\":\"quota\"}}".to_string()).await;
    let client = client(endpoint);

    let err = client.generate("prompt").await.unwrap_err();
    server.await.unwrap();

    assert_eq!(err.status(), Some(429));
    assert!(err.body().unwrap().contains("quota"));
}

#[tokio::test]
async fn zero_candidates_is_empty_response() {
    let (endpoint, server) = serve_once(200, "{\"candidates\":[]}".to_string()).await;
    let client = client(endpoint);

    let err = client.generate("prompt").await.unwrap_err();
    server.await.unwrap();

    assert!(matches!(err, ProviderError::EmptyResponse));
}

#[tokio::test]
async fn non_json_body_is_malformed() {
    let (endpoint, server) = serve_once(200, "<html>oops</html>".to_string()).await;
    let client = client(endpoint);

    let err = client.generate("prompt").await.unwrap_err();
    server.await.unwrap();

    assert!(matches!(err, ProviderError::MalformedResponse(_)));
}

#[tokio::test]
async fn refused_connection_is_transport_error() {
    let client = client(unused_endpoint().await);

    let err = client.generate("prompt").await.unwrap_err();

    assert!(matches!(err, ProviderError::Transport { status: None, .. }));
}

#[tokio::test]
async fn transport_errors_never_show_the_api_key() {
    let client = client(unused_endpoint().await);

    let err = client.generate("prompt").await.unwrap_err();
    assert!(!err.to_string().contains("test-key"));
    assert!(!format!("{:?}", err).contains("test-key"));

    let shown = FallbackReason::from(err).to_string();
    assert!(shown.starts_with("external provider failed"));
    assert!(!shown.contains("test-key"));
}
