//! The chat dispatcher: one message in, one reply or one classified failure out.
//!
//! Built once at startup from validated configuration and shared (behind an
//! `Arc`) with whatever serves requests. It holds no mutable state, so any
//! number of calls may run concurrently.

mod chat;
mod prompt;
mod request;


use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use edupulse_config::{resolve_credential, AssistantConfig, Credential};
use tracing::info;

use crate::openai::{OpenAiClient, OpenAiConfig};
use crate::session::SessionContextHolder;
use crate::{AiClient, ChatError, ProviderSelection};

pub use prompt::SYSTEM_PROMPT;
pub use request::ChatRequest;

/// Talks to exactly one provider/model pair on behalf of many sessions.
pub struct ChatDispatcher {
    client: Arc<dyn AiClient>,
    selection: ProviderSelection,
    system_prompt: &'static str,
    holder: SessionContextHolder,
    /// Upper bound on each provider call; `None` waits for the provider.
    timeout: Option<Duration>,
}

impl fmt::Debug for ChatDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatDispatcher")
            .field("selection", &self.selection)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl ChatDispatcher {
    /// Use `client` for every call, with no per-call timeout.
    pub fn new(client: Arc<dyn AiClient>, selection: ProviderSelection) -> Self {
        Self {
            client,
            selection,
            system_prompt: SYSTEM_PROMPT,
            holder: SessionContextHolder::new(),
            timeout: None,
        }
    }

    /// Build the OpenAI-compatible dispatcher described by `config`, reading
    /// the credential from the environment variable it names.
    ///
    /// Fails with [`ChatError::Configuration`] when the credential is
    /// missing, so a misconfigured service never starts.
    pub fn from_config(config: &AssistantConfig) -> Result<Self, ChatError> {
        let credential = resolve_credential(&config.credential_env)?;
        Self::from_credential(config, credential)
    }

    /// Like [`ChatDispatcher::from_config`] with an already-resolved credential.
    pub fn from_credential(
        config: &AssistantConfig,
        credential: Credential,
    ) -> Result<Self, ChatError> {
        let client = OpenAiClient::new(OpenAiConfig::from_assistant(config, credential))
            .map_err(|e| ChatError::Configuration(e.to_string()))?;

        let dispatcher = Self::new(Arc::new(client), ProviderSelection::from(config))
            .with_timeout(config.request_timeout());

        info!(
            provider = %dispatcher.selection.provider,
            model = %dispatcher.selection.model,
            "Chat dispatcher ready"
        );
        Ok(dispatcher)
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn system_prompt(&self) -> &str {
        self.system_prompt
    }

    pub fn selection(&self) -> &ProviderSelection {
        &self.selection
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}
