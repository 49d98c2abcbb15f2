//! OpenAI-compatible client configuration.

use std::fmt;
use std::time::Duration;

use edupulse_config::{AssistantConfig, Credential};

/// OpenAI-compatible client configuration.
#[derive(Clone)]
pub struct OpenAiConfig {
    pub credential: Credential,
    pub base_url: String,
    pub max_tokens: u32,
    pub temperature: f64,
    /// Overall HTTP request bound; `None` leaves it to the server.
    pub request_timeout: Option<Duration>,
    pub connect_timeout: Duration,
}

impl fmt::Debug for OpenAiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiConfig")
            .field("credential", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("request_timeout", &self.request_timeout)
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}

impl OpenAiConfig {
    /// Transport settings from the `[assistant]` config section.
    pub fn from_assistant(config: &AssistantConfig, credential: Credential) -> Self {
        Self {
            credential,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
            request_timeout: config.request_timeout(),
            connect_timeout: config.connect_timeout(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}
