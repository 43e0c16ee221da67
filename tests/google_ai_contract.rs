//! Google AI Gemini Contract Tests
//!
//! Verify that the Google AI service addresses the Generative Language API
//! and authenticates with `x-goog-api-key`.

use gemini_connector::config::{ConnectorConfig, build_service};
use gemini_connector::error::GeminiError;
use gemini_connector::message::ChatHistory;
use gemini_connector::providers::GoogleAiGeminiChatCompletionService;
use gemini_connector::service::ChatCompletionService;
use gemini_connector::settings::GeminiExecutionSettings;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GOOGLE_AI_PATH: &str = "/v1/models/gemini-1.5-flash:generateContent";

fn user_history(text: &str) -> ChatHistory {
    let mut history = ChatHistory::new();
    history.add_user_message(text);
    history
}

#[tokio::test]
async fn test_request_uses_api_key_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GOOGLE_AI_PATH))
        .and(header("x-goog-api-key", "AIza-test-key"))
        .and(body_partial_json(json!({
            "contents": [{"role": "user", "parts": [{"text": "Hello"}]}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "Hi there"}]},
                "finishReason": "STOP",
                "index": 0
            }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = GoogleAiGeminiChatCompletionService::new("gemini-1.5-flash", "AIza-test-key")
        .with_base_url(mock_server.uri());
    let result = service
        .get_chat_message_contents(&user_history("Hello"), None)
        .await;

    assert!(result.is_ok_and(|m| m[0].content == "Hi there"));
}

#[tokio::test]
async fn test_multiple_candidates() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GOOGLE_AI_PATH))
        .and(body_partial_json(json!({"generationConfig": {"candidateCount": 2}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [
                {"content": {"parts": [{"text": "first"}]}, "finishReason": "STOP", "index": 0},
                {"content": {"parts": [{"text": "second"}]}, "finishReason": "STOP", "index": 1}
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = GoogleAiGeminiChatCompletionService::new("gemini-1.5-flash", "k")
        .with_base_url(mock_server.uri());
    let settings = GeminiExecutionSettings::new().with_candidate_count(2);
    let messages = service
        .get_chat_message_contents(&user_history("Hello"), Some(&settings))
        .await
        .unwrap_or_default();

    let texts: Vec<&str> = messages.iter().map(|m| m.content.as_str()).collect();
    assert_eq!(texts, vec!["first", "second"]);
}

#[tokio::test]
async fn test_invalid_api_key_is_request_error() {
    let mock_server = MockServer::start().await;

    // Google AI reports a bad key as HTTP 400 INVALID_ARGUMENT.
    Mock::given(method("POST"))
        .and(path(GOOGLE_AI_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {"code": 400, "message": "API key not valid. Please pass a valid API key.", "status": "INVALID_ARGUMENT"}
        })))
        .mount(&mock_server)
        .await;

    let service = GoogleAiGeminiChatCompletionService::new("gemini-1.5-flash", "bad")
        .with_base_url(mock_server.uri());
    let result = service
        .get_chat_message_contents(&user_history("Hello"), None)
        .await;

    assert!(matches!(result, Err(GeminiError::RequestError(ref m)) if m.contains("API key not valid")));
}

#[tokio::test]
async fn test_service_built_from_config() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-1.5-flash:generateContent"))
        .and(header("x-goog-api-key", "AIza-from-config"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{"content": {"parts": [{"text": "configured"}]}, "finishReason": "STOP"}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let toml_str = format!(
        r#"
[service]
backend = "google_ai"
model_id = "gemini-1.5-flash"
api_version = "v1beta"
api_key = {{ type = "literal", value = "AIza-from-config" }}
base_url = "{}"

[runtime]
request_timeout_secs = 10
"#,
        mock_server.uri()
    );
    let config: ConnectorConfig = match toml::from_str(&toml_str) {
        Ok(c) => c,
        Err(e) => unreachable!("config should parse: {e}"),
    };
    let service = match build_service(&config) {
        Ok(s) => s,
        Err(e) => unreachable!("service should build: {e}"),
    };

    let result = service
        .get_chat_message_contents(&user_history("Hello"), Some(&config.settings))
        .await;

    assert!(result.is_ok_and(|m| m[0].content == "configured"));
}
