//! Async chat methods for ChatDispatcher.

use tracing::{debug, info_span, warn, Instrument};

use edupulse_common::{new_correlation_id, SessionId};

use crate::envelope::{ChatEnvelope, ChatInput};
use crate::session::HistoryEntry;
use crate::ChatError;

use super::request::{validate_message, ChatRequest};
use super::ChatDispatcher;

impl ChatDispatcher {
    /// Answer `message` in the context of `history`.
    ///
    /// `history` is read, never modified. Returns the provider's reply
    /// verbatim, or exactly one classified failure. Empty messages and
    /// malformed history fail before the provider is contacted.
    pub async fn chat(
        &self,
        message: &str,
        session_id: Option<&str>,
        history: &[HistoryEntry],
    ) -> Result<String, ChatError> {
        let span = info_span!(
            "chat",
            session = %SessionId::from_caller(session_id),
            request = %new_correlation_id()
        );
        self.dispatch(message, session_id, history)
            .instrument(span)
            .await
    }

    /// Run [`ChatDispatcher::chat`] on a decoded request body and shape the
    /// outcome for an HTTP response.
    pub async fn handle(&self, input: ChatInput) -> ChatEnvelope {
        let history = input.history.as_deref().unwrap_or_default();
        let result = self
            .chat(&input.message, input.session_id.as_deref(), history)
            .await;
        ChatEnvelope::from(result)
    }

    async fn dispatch(
        &self,
        message: &str,
        session_id: Option<&str>,
        history: &[HistoryEntry],
    ) -> Result<String, ChatError> {
        validate_message(message)?;
        let context = self.holder.resolve(session_id, history)?;
        let request = ChatRequest::new(self.system_prompt, context, message)?;
        let messages = request.to_messages();

        debug!(
            provider = %self.selection.provider,
            model = %self.selection.model,
            turns = request.history.len(),
            message_chars = message.chars().count(),
            "Awaiting provider"
        );

        let call = self.client.send_message(&self.selection, &messages);
        let result = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, call).await.map_err(|_| {
                warn!(timeout = ?limit, "Provider call timed out");
                ChatError::Timeout(Some(limit))
            })?,
            None => call.await,
        };

        let response = result.map_err(|e| {
            warn!(error = %e, "Provider call failed");
            ChatError::from(e)
        })?;

        if response.content.trim().is_empty() {
            warn!("Provider returned an empty reply");
            return Err(ChatError::Provider("provider returned an empty reply".into()));
        }

        debug!(
            input_tokens = response.usage.input_tokens,
            output_tokens = response.usage.output_tokens,
            total_tokens = response.usage.total_tokens(),
            reply_chars = response.content.chars().count(),
            "Provider replied"
        );
        Ok(response.content)
    }
}
