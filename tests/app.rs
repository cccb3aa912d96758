use claudegen::app::{self, BANNER, REPLY_HEADING};
use claudegen::config::{self, EnvMap};
use claudegen::credential::FALLBACK_FILE;
use claudegen::utils::SEPARATOR;
use claudegen::{Config, GenError};
use serde_json::json;
use std::fs;
use tempfile::tempdir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn message_response(content: serde_json::Value) -> serde_json::Value {
    json!({
        "id": "msg_app",
        "type": "message",
        "role": "assistant",
        "content": content,
        "model": "claude-3-5-sonnet-20241022",
        "stop_reason": "end_turn",
        "usage": {"input_tokens": 3, "output_tokens": 7}
    })
}

#[tokio::test]
async fn test_run_prints_banner_reply_and_separator() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .and(header("x-api-key", "sk-test-999"))
        .respond_with(ResponseTemplate::new(200).set_body_json(message_response(json!([
            {"type": "text", "text": "print(\"Hello World\")"},
            {"type": "text", "text": "ignored"}
        ]))))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = tempdir().unwrap();
    let fallback = dir.path().join(FALLBACK_FILE);
    fs::write(&fallback, "  sk-test-999  \n").unwrap();

    let config = Config::default().with_api_base(mock_server.uri());
    let mut out = Vec::new();
    app::run(config, &EnvMap::new(), Some(&fallback), &mut out)
        .await
        .unwrap();

    let stdout = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![BANNER, SEPARATOR, REPLY_HEADING, "print(\"Hello World\")", SEPARATOR]
    );
}

#[tokio::test]
async fn test_run_uses_key_from_dotenv() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .and(header("x-api-key", "from-dotenv"))
        .respond_with(ResponseTemplate::new(200).set_body_json(message_response(json!([
            {"type": "text", "text": "ok"}
        ]))))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = tempdir().unwrap();
    let dotenv = dir.path().join(".env");
    fs::write(&dotenv, "ANTHROPIC_API_KEY=from-dotenv\nthis line is not valid\n").unwrap();

    // Only the .env entries, so a key in the test process environment cannot interfere.
    let env = config::read_dotenv(&dotenv).unwrap();
    let config = Config::default().with_api_base(mock_server.uri());
    let mut out = Vec::new();
    app::run(config, &env, None, &mut out).await.unwrap();

    assert!(String::from_utf8(out).unwrap().lines().any(|l| l == "ok"));
}

#[tokio::test]
async fn test_run_service_error_after_banner() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(529).set_body_string("overloaded"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let env = EnvMap::from([("ANTHROPIC_API_KEY".to_string(), "test-key-1".to_string())]);
    let config = Config::default().with_api_base(mock_server.uri());
    let mut out = Vec::new();
    let result = app::run(config, &env, None, &mut out).await;

    assert!(matches!(result, Err(GenError::Api { status: 529, .. })));
    let stdout = String::from_utf8(out).unwrap();
    assert_eq!(stdout.lines().collect::<Vec<_>>(), vec![BANNER, SEPARATOR]);
}
