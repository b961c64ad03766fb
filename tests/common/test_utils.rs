use super::mocks::MockLlmClient;
use axum::Router;
use campus_notes::{
    Result,
    config::{Config, LlmConfig},
    notes::NotesGateway,
    server::{self, AppState},
};
use serde_json::{Value, json};
use std::sync::Arc;
use tempfile::TempDir;
use tokio::fs;

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    let mut config = Config::default();
    config.server.host = "127.0.0.1".to_string();
    config.server.logs.level = "debug".to_string();
    config.llm = LlmConfig {
        api_key: Some("test-api-key".to_string()),
        model: "gemini-flash-latest".to_string(),
        ..LlmConfig::default()
    };
    config
}

/// Router backed by the given mock provider
pub fn create_test_app(mock: Arc<MockLlmClient>) -> Router {
    let config = create_test_config();
    let gateway = NotesGateway::new(mock, &config.llm);
    server::router(AppState {
        gateway: Arc::new(gateway),
    })
}

/// Router with the provider disabled, as when no credential is set
pub fn create_disabled_app() -> Router {
    let config = create_test_config();
    server::router(AppState {
        gateway: Arc::new(NotesGateway::disabled(&config.llm)),
    })
}

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Create a test config YAML file
pub async fn create_test_config_file(dir: &TempDir, content: &str) -> Result<String> {
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, content).await?;
    Ok(config_path.to_string_lossy().to_string())
}

/// OpenAI-format chat completion body as the provider returns it
pub fn chat_completion_body(model: &str, content: &str) -> Value {
    json!({
        "id": "chatcmpl-abc123",
        "object": "chat.completion",
        "created": 1769041500,
        "model": model,
        "choices": [{
            "index": 0,
            "message": {
                "role": "assistant",
                "content": content
            },
            "finish_reason": "stop"
        }],
        "usage": {
            "prompt_tokens": 31,
            "completion_tokens": 120,
            "total_tokens": 151
        }
    })
}

/// OpenAI-format error body
pub fn api_error_body(message: &str, code: u16) -> Value {
    json!({
        "error": {
            "message": message,
            "type": "invalid_request_error",
            "param": null,
            "code": code.to_string()
        }
    })
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 8080
  logs:
    level: "debug"

llm:
  base_url: "http://localhost:9999/v1beta/openai"
  api_key: "file-api-key"
  model: "gemini-1.5-flash"
  system_prompt: "You are a patient teaching assistant."
  candidate_models:
    - "gemini-1.5-flash"
    - "gemini-pro"
"#;

/// Invalid configuration YAML for testing error cases
pub const INVALID_CONFIG_YAML: &str = r#"
server:
  port: "not-a-number"
"#;
