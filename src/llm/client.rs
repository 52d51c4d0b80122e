//! Core `LlmClient` trait and `ApiClient` implementation.
//!
//! `ApiClient` calls any OpenAI-compatible `/v1/chat/completions` endpoint.
//! All connection details come from [`LlmConfig`]; nothing is hardcoded.

use async_trait::async_trait;
use thiserror::Error;

use crate::config::LlmConfig;

// ---------------------------------------------------------------------------
// LlmError
// ---------------------------------------------------------------------------

/// Errors that can occur while talking to the LLM.
///
/// Every variant is a hard failure for the word being annotated: malformed
/// annotation JSON inside a successful completion is handled by the language
/// strategy, not here.
#[derive(Debug, Error)]
pub enum LlmError {
    /// HTTP transport or connection error.
    #[error("HTTP request failed: {0}")]
    Request(String),

    /// The request did not complete within the configured timeout.
    #[error("LLM request timed out")]
    Timeout,

    /// The API rejected the credential (401 / 403).
    #[error("LLM API rejected the credential (HTTP {0})")]
    Unauthorized(u16),

    /// The API reported a rate limit or exhausted quota (429).
    #[error("LLM API quota exceeded")]
    QuotaExceeded,

    /// Any other non-success HTTP status.
    #[error("LLM API error (HTTP {status}): {body}")]
    Status { status: u16, body: String },

    /// The HTTP response body was not the expected JSON envelope.
    #[error("failed to parse LLM response: {0}")]
    Parse(String),

    /// The LLM returned a response with no usable text content.
    #[error("LLM returned an empty response")]
    EmptyResponse,
}

impl From<reqwest::Error> for LlmError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            LlmError::Timeout
        } else {
            LlmError::Request(e.to_string())
        }
    }
}

// ---------------------------------------------------------------------------
// CompletionParams
// ---------------------------------------------------------------------------

/// Per-request generation settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletionParams {
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for CompletionParams {
    fn default() -> Self {
        Self {
            max_tokens: 100,
            temperature: 0.2,
        }
    }
}

impl From<&LlmConfig> for CompletionParams {
    fn from(config: &LlmConfig) -> Self {
        Self {
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        }
    }
}

// ---------------------------------------------------------------------------
// LlmClient trait
// ---------------------------------------------------------------------------

/// Text-in / text-out completion capability.
///
/// Implementors must be `Send + Sync` so they can be shared across tasks
/// (e.g. wrapped in `Arc<dyn LlmClient>`).
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn send(&self, prompt: &str, params: &CompletionParams) -> Result<String, LlmError>;
}

// ---------------------------------------------------------------------------
// ApiClient
// ---------------------------------------------------------------------------

/// Calls an OpenAI-compatible `/v1/chat/completions` endpoint.
///
/// The prompt is sent as a single user message.  Responses are read from
/// `choices[0].message.content`, or from `choices[0].text` for providers that
/// answer in the legacy completions shape.
pub struct ApiClient {
    client: reqwest::Client,
    config: LlmConfig,
}

impl ApiClient {
    /// Build an `ApiClient` from application config.
    ///
    /// The HTTP client is pre-configured with the per-request timeout from
    /// `config.timeout_secs`.
    pub fn from_config(config: &LlmConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            config: config.clone(),
        }
    }

    fn endpoint(&self) -> String {
        self.config.completions_url()
    }
}

#[async_trait]
impl LlmClient for ApiClient {
    async fn send(&self, prompt: &str, params: &CompletionParams) -> Result<String, LlmError> {
        let body = serde_json::json!({
            "model":       self.config.model,
            "messages": [
                { "role": "user", "content": prompt }
            ],
            "stream":      false,
            "temperature": params.temperature,
            "max_tokens":  params.max_tokens
        });

        let mut req = self.client.post(self.endpoint()).json(&body);

        let key = self.config.api_key.as_deref().unwrap_or("");
        if !key.is_empty() {
            req = req.bearer_auth(key);
        }

        let response = req.send().await?;
        let status = response.status();

        if !status.is_success() {
            let code = status.as_u16();
            return Err(match code {
                401 | 403 => LlmError::Unauthorized(code),
                429 => LlmError::QuotaExceeded,
                _ => LlmError::Status {
                    status: code,
                    body: response.text().await.unwrap_or_default(),
                },
            });
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| LlmError::Parse(e.to_string()))?;

        completion_text(&json)
    }
}

/// Pull the generated text out of a completions envelope.
fn completion_text(json: &serde_json::Value) -> Result<String, LlmError> {
    let choice = &json["choices"][0];
    let text = choice["message"]["content"]
        .as_str()
        .or_else(|| choice["text"].as_str())
        .ok_or(LlmError::EmptyResponse)?
        .trim();

    if text.is_empty() {
        return Err(LlmError::EmptyResponse);
    }

    Ok(text.to_string())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn make_config(api_key: Option<&str>) -> LlmConfig {
        LlmConfig {
            api_key: api_key.map(|s| s.to_string()),
            base_url: "http://localhost:8080/".into(),
            ..LlmConfig::default()
        }
    }

    #[test]
    fn from_config_builds_without_panic() {
        let _client = ApiClient::from_config(&make_config(None));
        let _client = ApiClient::from_config(&make_config(Some("sk-test-1234")));
    }

    #[test]
    fn endpoint_strips_trailing_slash() {
        let client = ApiClient::from_config(&make_config(None));
        assert_eq!(
            client.endpoint(),
            "http://localhost:8080/v1/chat/completions"
        );
    }

    #[test]
    fn full_endpoint_is_not_extended() {
        let mut config = make_config(Some("sk-test"));
        config.endpoint = Some("https://api.openai.com/v1/chat/completions".into());
        let client = ApiClient::from_config(&config);
        assert_eq!(
            client.endpoint(),
            "https://api.openai.com/v1/chat/completions"
        );
    }

    #[test]
    fn params_follow_config() {
        let mut config = make_config(None);
        config.max_tokens = 64;
        config.temperature = 0.5;
        let params = CompletionParams::from(&config);
        assert_eq!(params.max_tokens, 64);
        assert_eq!(params.temperature, 0.5);
    }

    #[test]
    fn reads_chat_message_content() {
        let json = serde_json::json!({
            "choices": [{ "message": { "role": "assistant", "content": "  {\"a\":1}\n" } }]
        });
        assert_eq!(completion_text(&json).unwrap(), "{\"a\":1}");
    }

    #[test]
    fn reads_legacy_completion_text() {
        let json = serde_json::json!({ "choices": [{ "text": "hello" }] });
        assert_eq!(completion_text(&json).unwrap(), "hello");
    }

    #[test]
    fn missing_or_blank_content_is_empty_response() {
        let none = serde_json::json!({ "choices": [] });
        assert!(matches!(completion_text(&none), Err(LlmError::EmptyResponse)));

        let blank = serde_json::json!({ "choices": [{ "message": { "content": "  " } }] });
        assert!(matches!(completion_text(&blank), Err(LlmError::EmptyResponse)));
    }

    /// Verify that `ApiClient` is object-safe (usable as `dyn LlmClient`).
    #[test]
    fn client_is_object_safe() {
        let client: Box<dyn LlmClient> = Box::new(ApiClient::from_config(&make_config(None)));
        drop(client);
    }
}
