//! Core `LanguageService` trait and `ApiClient` implementation.
//!
//! `ApiClient` calls any OpenAI-compatible `/v1/chat/completions` endpoint.
//! Connection details come from [`LlmConfig`]; the bearer credential comes
//! from the session on every call.

use async_trait::async_trait;
use thiserror::Error;

use crate::config::LlmConfig;
use crate::session::Credential;

// ---------------------------------------------------------------------------
// LlmError
// ---------------------------------------------------------------------------

/// Errors that can occur during a completion call.
#[derive(Debug, Error)]
pub enum LlmError {
    /// The provider rejected the credential (HTTP 401).
    #[error("the API key was rejected by the provider")]
    Unauthorized,

    /// HTTP transport or connection error.
    #[error("HTTP request failed: {0}")]
    Request(String),

    /// The request did not complete within the configured timeout.
    #[error("completion request timed out")]
    Timeout,

    /// The provider answered with a non-success status.
    #[error("provider returned HTTP {status}: {message}")]
    Api { status: u16, message: String },

    /// The HTTP response could not be parsed as expected JSON.
    #[error("failed to parse completion response: {0}")]
    Parse(String),

    /// The response held no completion candidate.
    #[error("provider returned no completion")]
    EmptyResponse,
}

impl LlmError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, LlmError::Unauthorized)
    }
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
// LanguageService trait
// ---------------------------------------------------------------------------

/// A text-generation backend.
///
/// `complete` sends one system instruction and one user message and returns
/// the first completion's content verbatim.  Implementors must be
/// `Send + Sync` so they can be shared as `Arc<dyn LanguageService>`.
#[async_trait]
pub trait LanguageService: Send + Sync {
    async fn complete(
        &self,
        credential: &Credential,
        system_instruction: &str,
        user_content: &str,
    ) -> Result<String, LlmError>;
}

// ---------------------------------------------------------------------------
// ApiClient
// ---------------------------------------------------------------------------

/// Calls an OpenAI-compatible `/v1/chat/completions` endpoint.
pub struct ApiClient {
    client: reqwest::Client,
    config: LlmConfig,
}

impl ApiClient {
    /// Build an `ApiClient` from application config.
    ///
    /// The HTTP client carries the per-request timeout from
    /// `config.timeout_secs`.  A default client is used if the builder fails.
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
        format!(
            "{}/v1/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }

    fn request_body(&self, system_instruction: &str, user_content: &str) -> serde_json::Value {
        let mut body = serde_json::json!({
            "model": self.config.model,
            "messages": [
                { "role": "system", "content": system_instruction },
                { "role": "user",   "content": user_content }
            ],
            "stream": false
        });
        if let Some(t) = self.config.temperature {
            body["temperature"] = serde_json::json!(t);
        }
        body
    }
}

#[async_trait]
impl LanguageService for ApiClient {
    async fn complete(
        &self,
        credential: &Credential,
        system_instruction: &str,
        user_content: &str,
    ) -> Result<String, LlmError> {
        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(credential.expose())
            .json(&self.request_body(system_instruction, user_content))
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        parse_completion(status, &body)
    }
}

/// Turn an HTTP status and body into the completion text or an [`LlmError`].
///
/// Only the first candidate is read; its content is returned untouched.
pub fn parse_completion(status: u16, body: &str) -> Result<String, LlmError> {
    if status == 401 {
        return Err(LlmError::Unauthorized);
    }

    if !(200..300).contains(&status) {
        return Err(LlmError::Api {
            status,
            message: provider_error_message(body),
        });
    }

    let json: serde_json::Value =
        serde_json::from_str(body).map_err(|e| LlmError::Parse(e.to_string()))?;

    json["choices"][0]["message"]["content"]
        .as_str()
        .map(str::to_string)
        .ok_or(LlmError::EmptyResponse)
}

/// Pull `error.message` out of an OpenAI-style error body, else the raw body.
fn provider_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
