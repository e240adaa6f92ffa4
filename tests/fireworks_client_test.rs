mod helpers;

use std::sync::{Arc, Mutex};

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use serde_json::{Value, json};

use voxrelay::application::ports::{CompletionRequest, LlmClient, LlmClientError};
use voxrelay::infrastructure::llm::FireworksClient;

use helpers::start_mock_server;

type Captured = Arc<Mutex<Vec<(Option<String>, Value)>>>;

async fn chat_completions(
    State(captured): State<Captured>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(String::from);
    captured.lock().unwrap().push((auth, body));
    Json(json!({
        "choices": [{ "message": { "role": "assistant", "content": "  Technology \n" } }]
    }))
}

fn request(system_prompt: Option<&str>) -> CompletionRequest {
    CompletionRequest {
        model: "accounts/fireworks/models/test".to_string(),
        system_prompt: system_prompt.map(String::from),
        user_prompt: "What is this about?".to_string(),
        max_tokens: 50,
        temperature: 0.3,
    }
}

async fn start() -> (FireworksClient, Captured, tokio::sync::oneshot::Sender<()>) {
    let captured: Captured = Arc::default();
    let app = Router::new()
        .route("/chat/completions", post(chat_completions))
        .with_state(captured.clone());
    let (base_url, shutdown_tx) = start_mock_server(app).await;
    let client = FireworksClient::new(Some("fw-key".to_string()), Some(base_url));
    (client, captured, shutdown_tx)
}

#[tokio::test]
async fn given_system_prompt_when_completing_then_sends_both_messages_with_bearer_token() {
    let (client, captured, shutdown_tx) = start().await;

    let answer = client.complete(&request(Some("Be terse."))).await.unwrap();

    assert_eq!(answer, "  Technology \n");
    let calls = captured.lock().unwrap().clone();
    let (auth, body) = &calls[0];
    assert_eq!(auth.as_deref(), Some("Bearer fw-key"));
    assert_eq!(body["model"], "accounts/fireworks/models/test");
    assert_eq!(body["max_tokens"], 50);
    assert_eq!(body["messages"][0]["role"], "system");
    assert_eq!(body["messages"][0]["content"], "Be terse.");
    assert_eq!(body["messages"][1]["role"], "user");
    assert_eq!(body["messages"][1]["content"], "What is this about?");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_no_system_prompt_when_completing_then_sends_only_user_message() {
    let (client, captured, shutdown_tx) = start().await;

    client.complete(&request(None)).await.unwrap();

    let messages = captured.lock().unwrap()[0].1["messages"].clone();
    assert_eq!(messages.as_array().map(Vec::len), Some(1));
    assert_eq!(messages[0]["role"], "user");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_missing_api_key_when_completing_then_not_configured_without_network_call() {
    let client = FireworksClient::new(None, Some("http://127.0.0.1:9".to_string()));

    let err = client.complete(&request(None)).await.unwrap_err();

    assert!(matches!(err, LlmClientError::NotConfigured("Fireworks")));
    assert_eq!(err.to_string(), "Fireworks API key not configured");
}

#[tokio::test]
async fn given_blank_api_key_when_completing_then_treated_as_not_configured() {
    let client = FireworksClient::new(Some("   ".to_string()), None);

    let err = client.complete(&request(None)).await.unwrap_err();

    assert!(matches!(err, LlmClientError::NotConfigured(_)));
}

#[tokio::test]
async fn given_api_error_when_completing_then_error_carries_status_and_body() {
    let app = Router::new().route(
        "/chat/completions",
        post(|| async { (StatusCode::TOO_MANY_REQUESTS, "rate limited") }),
    );
    let (base_url, shutdown_tx) = start_mock_server(app).await;
    let client = FireworksClient::new(Some("fw-key".to_string()), Some(base_url));

    let err = client.complete(&request(None)).await.unwrap_err();

    assert_eq!(err.to_string(), "Fireworks API error: 429 - rate limited");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_empty_choices_when_completing_then_invalid_response() {
    let app = Router::new().route(
        "/chat/completions",
        post(|| async { Json(json!({ "choices": [] })) }),
    );
    let (base_url, shutdown_tx) = start_mock_server(app).await;
    let client = FireworksClient::new(Some("fw-key".to_string()), Some(base_url));

    let err = client.complete(&request(None)).await.unwrap_err();

    assert!(matches!(err, LlmClientError::InvalidResponse(_)));
    shutdown_tx.send(()).ok();
}
