//! Assistant (model provider) configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_PROVIDER: &str = "openai";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_CREDENTIAL_ENV: &str = "EMERGENT_LLM_KEY";

/// The fixed provider/model pair and transport settings used for every call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AssistantConfig {
    /// Provider name, informational; the transport is OpenAI-compatible.
    pub provider: String,
    pub model: String,
    /// Base URL of the Chat Completions API (without `/chat/completions`).
    pub base_url: String,
    /// Environment variable holding the provider credential.
    pub credential_env: String,
    /// Valid range: 1-16384.
    pub max_tokens: u32,
    /// Valid range: 0.0-2.0.
    pub temperature: f64,
    /// Per-call bound in seconds; 0 disables it (valid range: 0-600).
    pub request_timeout_secs: u32,
    /// Valid range: 1-60.
    pub connect_timeout_secs: u32,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_PROVIDER.to_string(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            credential_env: DEFAULT_CREDENTIAL_ENV.to_string(),
            max_tokens: 1024,
            temperature: 0.7,
            request_timeout_secs: 60,
            connect_timeout_secs: 10,
        }
    }
}

impl AssistantConfig {
    pub fn request_timeout(&self) -> Option<Duration> {
        match self.request_timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(u64::from(secs))),
        }
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.connect_timeout_secs))
    }
}
