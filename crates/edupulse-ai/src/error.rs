//! Classified failures returned by the chat dispatcher.

use std::time::Duration;

use edupulse_common::ConfigError;

use crate::AiError;

/// The coarse failure class, for callers that only need to branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatErrorKind {
    Configuration,
    Validation,
    Provider,
    Timeout,
}

/// Every way a chat call (or dispatcher construction) can fail.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    /// The service is unconfigured; raised at construction, never per call.
    #[error("assistant is not configured: {0}")]
    Configuration(String),

    /// The caller's input was bad. No provider call was made.
    #[error("invalid chat request: {0}")]
    Validation(String),

    /// The provider call failed; carries the underlying error's message.
    #[error("Failed to get AI response: {0}")]
    Provider(String),

    /// The provider did not answer in time. Holds the dispatcher's bound
    /// when that is what fired.
    #[error("Failed to get AI response: request timed out")]
    Timeout(Option<Duration>),
}

impl ChatError {
    pub fn kind(&self) -> ChatErrorKind {
        match self {
            ChatError::Configuration(_) => ChatErrorKind::Configuration,
            ChatError::Validation(_) => ChatErrorKind::Validation,
            ChatError::Provider(_) => ChatErrorKind::Provider,
            ChatError::Timeout(_) => ChatErrorKind::Timeout,
        }
    }

    /// HTTP status an API layer should answer with.
    pub fn status_code(&self) -> u16 {
        match self.kind() {
            ChatErrorKind::Validation => 400,
            ChatErrorKind::Provider => 502,
            ChatErrorKind::Configuration => 503,
            ChatErrorKind::Timeout => 504,
        }
    }
}

impl From<ConfigError> for ChatError {
    fn from(err: ConfigError) -> Self {
        ChatError::Configuration(err.to_string())
    }
}

impl From<AiError> for ChatError {
    fn from(err: AiError) -> Self {
        match err {
            AiError::Timeout => ChatError::Timeout(None),
            other => ChatError::Provider(other.to_string()),
        }
    }
}
