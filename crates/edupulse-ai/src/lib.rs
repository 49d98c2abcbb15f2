//! AI engine for the EduPulse learning assistant.
//!
//! Provides:
//! - the [`AiClient`] provider abstraction and an OpenAI-compatible client
//! - the session context holder that validates caller-supplied history
//! - the [`ChatDispatcher`], which turns one message into one reply or one
//!   classified [`ChatError`]

pub mod dispatcher;
pub mod envelope;
pub mod error;
pub mod openai;
pub mod session;

use async_trait::async_trait;

pub use dispatcher::{ChatDispatcher, ChatRequest, SYSTEM_PROMPT};
pub use envelope::{ChatEnvelope, ChatInput};
pub use error::{ChatError, ChatErrorKind};
pub use openai::{OpenAiClient, OpenAiConfig};
pub use session::{HistoryEntry, SessionContext, SessionContextHolder, Turn, TurnRole};

/// A hosted model backend that answers one composed conversation.
#[async_trait]
pub trait AiClient: Send + Sync {
    /// Send `messages` (system prompt first, newest user message last) to
    /// the selected model and return its reply.
    async fn send_message(
        &self,
        selection: &ProviderSelection,
        messages: &[Message],
    ) -> Result<AiResponse, AiError>;
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// The single provider/model pair a dispatcher talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderSelection {
    pub provider: String,
    pub model: String,
}

impl ProviderSelection {
    pub fn new(provider: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            model: model.into(),
        }
    }
}

impl Default for ProviderSelection {
    fn default() -> Self {
        Self::new(
            edupulse_config::schema::DEFAULT_PROVIDER,
            edupulse_config::schema::DEFAULT_MODEL,
        )
    }
}

impl From<&edupulse_config::AssistantConfig> for ProviderSelection {
    fn from(config: &edupulse_config::AssistantConfig) -> Self {
        Self::new(&config.provider, &config.model)
    }
}

#[derive(Debug, Clone)]
pub struct AiResponse {
    pub content: String,
    pub usage: TokenUsage,
}

#[derive(Debug, Clone, Default)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    #[error("Rate limited: {0}")]
    RateLimited(String),
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Timeout")]
    Timeout,
}
