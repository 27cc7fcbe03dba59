#[path = "../../../helpers/mod.rs"]
mod helpers;

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use serde_json::Value;

use babel::application::ports::{LlmClient, LlmClientError};
use babel::infrastructure::llm::OpenAiClient;

use helpers::start_mock_server;

type CapturedBody = Arc<Mutex<Option<Value>>>;

async fn start_mock_chat_server(
    status: u16,
    body: &'static str,
) -> (String, CapturedBody, tokio::sync::oneshot::Sender<()>) {
    let captured: CapturedBody = Arc::new(Mutex::new(None));

    let app = Router::new()
        .route(
            "/chat/completions",
            post(
                move |State(captured): State<CapturedBody>, axum::Json(request): axum::Json<Value>| async move {
                    *captured.lock().unwrap() = Some(request);
                    (StatusCode::from_u16(status).unwrap(), body).into_response()
                },
            ),
        )
        .with_state(Arc::clone(&captured));

    let (base_url, shutdown_tx) = start_mock_server(app).await;
    (base_url, captured, shutdown_tx)
}

fn client(base_url: &str) -> OpenAiClient {
    OpenAiClient::new(
        reqwest::Client::new(),
        "test-key".to_string(),
        base_url.to_string(),
        "llama-3.3-70b-versatile".to_string(),
    )
}

#[tokio::test]
async fn given_prompt_when_completing_then_sends_single_user_message_and_returns_first_choice() {
    let response = r#"{"choices": [
        {"message": {"role": "assistant", "content": " hola "}},
        {"message": {"role": "assistant", "content": "second"}}
    ]}"#;
    let (base_url, captured, shutdown_tx) = start_mock_chat_server(200, response).await;

    let result = client(&base_url).complete("Traduce: hello").await;

    assert_eq!(result.unwrap(), " hola ");
    let request = captured.lock().unwrap().clone().unwrap();
    assert_eq!(request["model"], "llama-3.3-70b-versatile");
    let messages = request["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0]["role"], "user");
    assert_eq!(messages[0]["content"], "Traduce: hello");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_too_many_requests_when_completing_then_returns_rate_limited() {
    let (base_url, _captured, shutdown_tx) =
        start_mock_chat_server(429, r#"{"error": "slow down"}"#).await;

    let result = client(&base_url).complete("hello").await;

    assert!(matches!(result, Err(LlmClientError::RateLimited)));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_server_error_when_completing_then_returns_api_request_failed() {
    let (base_url, _captured, shutdown_tx) =
        start_mock_chat_server(500, r#"{"error": "boom"}"#).await;

    let result = client(&base_url).complete("hello").await;

    match result {
        Err(LlmClientError::ApiRequestFailed(msg)) => assert!(msg.contains("500")),
        other => panic!("expected ApiRequestFailed, got {:?}", other),
    }
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_no_choices_when_completing_then_returns_invalid_response() {
    let (base_url, _captured, shutdown_tx) =
        start_mock_chat_server(200, r#"{"choices": []}"#).await;

    let result = client(&base_url).complete("hello").await;

    assert!(matches!(result, Err(LlmClientError::InvalidResponse(_))));
    shutdown_tx.send(()).ok();
}
