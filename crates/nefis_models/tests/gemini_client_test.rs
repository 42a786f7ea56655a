//! Retry and credential behavior of the Gemini client over a scripted transport.

use async_trait::async_trait;
use nefis_error::{GeminiError, GeminiErrorKind};
use nefis_models::gemini::GenerateContentRequest;
use nefis_models::{CompletionOptions, GeminiClient, GeminiConfig, GeminiTransport, TransportResponse};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Transport that replays a fixed script of outcomes.
#[derive(Default)]
struct ScriptedTransport {
    script: Mutex<VecDeque<Result<TransportResponse, GeminiError>>>,
    calls: AtomicUsize,
    last_url: Mutex<Option<String>>,
    last_prompt: Mutex<Option<String>>,
}

impl ScriptedTransport {
    fn new(script: Vec<Result<TransportResponse, GeminiError>>) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(script.into()),
            ..Default::default()
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GeminiTransport for ScriptedTransport {
    async fn post_json(
        &self,
        url: &str,
        body: &GenerateContentRequest,
        _timeout: Duration,
    ) -> Result<TransportResponse, GeminiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_url.lock().unwrap() = Some(url.to_string());
        *self.last_prompt.lock().unwrap() = body.contents()[0].parts[0].text.clone();
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GeminiError::new(GeminiErrorKind::Transport("script exhausted".into()))))
    }
}

fn completion(text: &str) -> Result<TransportResponse, GeminiError> {
    let body = serde_json::json!({
        "candidates": [{"content": {"parts": [{"text": text}], "role": "model"}}]
    });
    Ok(TransportResponse {
        status: 200,
        body: body.to_string(),
    })
}

fn status(code: u16, body: &str) -> Result<TransportResponse, GeminiError> {
    Ok(TransportResponse {
        status: code,
        body: body.to_string(),
    })
}

fn config() -> GeminiConfig {
    GeminiConfig::default().with_api_key("test-key")
}

#[tokio::test(start_paused = true)]
async fn test_recovers_on_third_attempt() {
    let transport = ScriptedTransport::new(vec![
        status(500, "boom"),
        Err(GeminiError::new(GeminiErrorKind::Transport("timed out".into()))),
        completion("{\"title\": \"Soup\"}"),
    ]);
    let client = GeminiClient::with_transport(&config(), transport.clone()).unwrap();

    let started = tokio::time::Instant::now();
    let text = client
        .complete("make soup", &CompletionOptions::recipe())
        .await
        .unwrap();

    assert_eq!(text, "{\"title\": \"Soup\"}");
    assert_eq!(transport.calls(), 3);
    assert!(started.elapsed() >= Duration::from_secs(4));
    assert_eq!(
        transport.last_prompt.lock().unwrap().as_deref(),
        Some("make soup")
    );
}

#[tokio::test(start_paused = true)]
async fn test_surfaces_last_status_after_three_failures() {
    let transport = ScriptedTransport::new(vec![
        status(500, "first"),
        status(502, "second"),
        status(503, "third"),
    ]);
    let client = GeminiClient::with_transport(&config(), transport.clone()).unwrap();

    let err = client
        .complete("make soup", &CompletionOptions::recipe())
        .await
        .unwrap_err();

    assert_eq!(transport.calls(), 3);
    assert_eq!(
        err.kind,
        GeminiErrorKind::HttpStatus {
            status_code: 503,
            message: "third".to_string(),
        }
    );
}

#[tokio::test(start_paused = true)]
async fn test_client_errors_are_retried_too() {
    let transport = ScriptedTransport::new(vec![status(429, "slow down"), completion("ok")]);
    let client = GeminiClient::with_transport(&config(), transport.clone()).unwrap();

    let text = client
        .complete("hi", &CompletionOptions::recipe())
        .await
        .unwrap();

    assert_eq!(text, "ok");
    assert_eq!(transport.calls(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_malformed_body_is_not_retried() {
    let transport = ScriptedTransport::new(vec![status(200, r#"{"candidates": []}"#), completion("late")]);
    let client = GeminiClient::with_transport(&config(), transport.clone()).unwrap();

    let err = client
        .complete("hi", &CompletionOptions::recipe())
        .await
        .unwrap_err();

    assert!(matches!(err.kind, GeminiErrorKind::MalformedResponse(_)));
    assert_eq!(transport.calls(), 1);
}

#[test]
fn test_missing_key_rejected_before_any_request() {
    let transport = ScriptedTransport::new(vec![completion("unused")]);

    let err = GeminiClient::with_transport(&GeminiConfig::default(), transport.clone()).unwrap_err();
    assert_eq!(err.kind, GeminiErrorKind::MissingApiKey);

    let blank = GeminiConfig::default().with_api_key("  ");
    let err = GeminiClient::with_transport(&blank, transport.clone()).unwrap_err();
    assert_eq!(err.kind, GeminiErrorKind::MissingApiKey);

    assert_eq!(transport.calls(), 0);
}

#[test]
fn test_production_client_requires_key() {
    let err = GeminiClient::new(&GeminiConfig::default()).unwrap_err();
    assert_eq!(err.kind, GeminiErrorKind::MissingApiKey);
}

#[tokio::test(start_paused = true)]
async fn test_endpoint_carries_model_and_key() {
    let config = GeminiConfig::default().with_api_key("test-key");
    let transport = ScriptedTransport::new(vec![completion("ok")]);
    let client = GeminiClient::with_transport(&config, transport.clone()).unwrap();

    client
        .complete("hi", &CompletionOptions::recipe())
        .await
        .unwrap();

    let url = transport.last_url.lock().unwrap().clone().unwrap();
    assert!(url.ends_with(&format!(
        "/models/{}:generateContent?key=test-key",
        client.model_name()
    )));
    assert!(!format!("{:?}", client).contains("test-key"));
}
