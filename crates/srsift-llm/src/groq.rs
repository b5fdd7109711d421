//! Groq Provider Implementation
//!
//! Talks to Groq's OpenAI-compatible chat completions endpoint. The prompt is
//! sent as a single user message and the first choice's content is returned
//! verbatim.
//!
//! # Features
//!
//! - Async HTTP communication via `reqwest`
//! - Configurable endpoint, model, temperature and timeout
//! - Status codes mapped onto [`LlmError`] variants
//!
//! One prompt, one request: there is no retry loop.
//!
//! # Examples
//!
//! ```no_run
//! use srsift_llm::{GroqConfig, GroqProvider};
//!
//! let config = GroqConfig::new("gsk_...").with_model("llama3-8b-8192");
//! let provider = GroqProvider::new(config).unwrap();
//! ```

use crate::LlmError;
use serde::{Deserialize, Serialize};
use srsift_domain::traits::LlmProvider as LlmProviderTrait;
use std::fmt;
use std::time::Duration;
use tracing::debug;

/// Default Groq API endpoint (OpenAI-compatible)
pub const DEFAULT_ENDPOINT: &str = "https://api.groq.com/openai/v1";

/// Default model
pub const DEFAULT_MODEL: &str = "llama3-8b-8192";

/// Default timeout for LLM requests (120 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Environment variable holding the API key
pub const API_KEY_VAR: &str = "GROQ_API_KEY";

/// Environment variable overriding the endpoint
pub const ENDPOINT_VAR: &str = "GROQ_API_BASE";

/// Connection settings for [`GroqProvider`]
#[derive(Clone)]
pub struct GroqConfig {
    /// Bearer token sent with every request
    pub api_key: String,

    /// Base URL, without the `/chat/completions` suffix
    pub endpoint: String,

    /// Model identifier
    pub model: String,

    /// Whole-request timeout in seconds
    pub timeout_secs: u64,

    /// Sampling temperature
    pub temperature: f32,
}

impl GroqConfig {
    /// Create a config with default endpoint, model and timeout
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            temperature: 0.0,
        }
    }

    /// Read `GROQ_API_KEY` (required) and `GROQ_API_BASE` (optional) from the process environment
    pub fn from_env() -> Result<Self, LlmError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup
    ///
    /// A missing or blank API key is a configuration error.
    ///
    /// # Examples
    ///
    /// ```
    /// use srsift_llm::GroqConfig;
    ///
    /// let config = GroqConfig::from_lookup(|key| match key {
    ///     "GROQ_API_KEY" => Some("gsk_test".to_string()),
    ///     _ => None,
    /// }).unwrap();
    /// assert_eq!(config.api_key, "gsk_test");
    ///
    /// assert!(GroqConfig::from_lookup(|_| None).is_err());
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, LlmError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                LlmError::Configuration(format!(
                    "{} is not set; export it or add it to a .env file",
                    API_KEY_VAR
                ))
            })?;

        let mut config = Self::new(api_key);
        if let Some(endpoint) = lookup(ENDPOINT_VAR).filter(|e| !e.trim().is_empty()) {
            config.endpoint = endpoint.trim().trim_end_matches('/').to_string();
        }
        Ok(config)
    }

    /// Set the model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

// Keep the key out of logs and panic messages.
impl fmt::Debug for GroqConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroqConfig")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("timeout_secs", &self.timeout_secs)
            .field("temperature", &self.temperature)
            .finish()
    }
}

/// Groq chat completions provider
pub struct GroqProvider {
    config: GroqConfig,
    client: reqwest::Client,
}

/// Request body for the chat completions API
#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Response from the chat completions API
#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl GroqProvider {
    /// Create a new provider
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::Configuration`] if the HTTP client cannot be built.
    pub fn new(config: GroqConfig) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| LlmError::Configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Full URL of the chat completions endpoint
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.endpoint.trim_end_matches('/'))
    }

    /// Provider configuration
    pub fn config(&self) -> &GroqConfig {
        &self.config
    }

    async fn send(&self, prompt: &str) -> Result<String, LlmError> {
        let url = self.completions_url();
        let request_body = ChatRequest {
            model: &self.config.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.config.temperature,
        };

        debug!("POST {} (model {}, {} prompt bytes)", url, self.config.model, prompt.len());

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| LlmError::Communication(format!("Request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| LlmError::Communication(format!("Failed to read response body: {}", e)))?;

        if !status.is_success() {
            return Err(status_error(status.as_u16(), &self.config.model, &body));
        }

        parse_chat_response(&body)
    }
}

impl LlmProviderTrait for GroqProvider {
    type Error = LlmError;

    async fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        self.send(prompt).await
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}

/// Map a non-success HTTP status onto an error
fn status_error(status: u16, model: &str, body: &str) -> LlmError {
    match status {
        401 | 403 => LlmError::Unauthorized(format!("HTTP {}: {}", status, body)),
        404 => LlmError::ModelNotAvailable(model.to_string()),
        429 => LlmError::RateLimitExceeded,
        _ => LlmError::Communication(format!("HTTP {}: {}", status, body)),
    }
}

/// Pull the first choice's text out of a chat completions body
fn parse_chat_response(body: &str) -> Result<String, LlmError> {
    let parsed: ChatResponse = serde_json::from_str(body)
        .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

    parsed
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| LlmError::InvalidResponse("Response contained no choices".to_string()))
}
