use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use studyflow::application::ports::{GenerationBackend, GenerationError};
use studyflow::infrastructure::llm::LocalGenerationBackend;

const TIMEOUT: Duration = Duration::from_secs(5);

#[tokio::test]
async fn given_response_object_when_generating_then_returns_response_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .and(body_json(json!({
            "model": "llama3",
            "prompt": "list topics",
            "stream": false
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "model": "llama3",
            "response": "[{\"topic\":\"Limits\",\"subtopics\":[]}]",
            "done": true
        })))
        .expect(1)
        .mount(&server)
        .await;
    let backend = LocalGenerationBackend::new(&format!("{}/", server.uri()), "llama3", TIMEOUT)
        .unwrap();

    let text = backend.generate("list topics").await.unwrap();

    assert_eq!(text, "[{\"topic\":\"Limits\",\"subtopics\":[]}]");
}

#[tokio::test]
async fn given_object_without_response_when_generating_then_returns_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "done": true })))
        .mount(&server)
        .await;
    let backend = LocalGenerationBackend::new(&server.uri(), "llama3", TIMEOUT).unwrap();

    let result = backend.generate("prompt").await;

    assert!(matches!(result, Err(GenerationError::InvalidResponse(_))));
}

#[tokio::test]
async fn given_missing_model_when_generating_then_returns_api_request_failed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(404).set_body_string("model not found"))
        .mount(&server)
        .await;
    let backend = LocalGenerationBackend::new(&server.uri(), "missing", TIMEOUT).unwrap();

    let result = backend.generate("prompt").await;

    assert!(matches!(result, Err(GenerationError::ApiRequestFailed(msg)) if msg.contains("404")));
}

#[tokio::test]
async fn given_unreachable_server_when_generating_then_returns_api_request_failed() {
    let backend =
        LocalGenerationBackend::new("http://127.0.0.1:9", "llama3", TIMEOUT).unwrap();

    let result = backend.generate("prompt").await;

    assert!(matches!(
        result,
        Err(GenerationError::ApiRequestFailed(_)) | Err(GenerationError::Timeout)
    ));
}
