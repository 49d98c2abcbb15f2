//! Request and response bodies for an HTTP layer in front of the dispatcher.

use serde::{Deserialize, Serialize};

use crate::session::HistoryEntry;
use crate::ChatError;

/// Decoded chat request body.
///
/// Accepts both snake_case and the frontend's camelCase field names. A
/// missing `message` decodes as empty and is rejected by the dispatcher as
/// a validation failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatInput {
    #[serde(default)]
    pub message: String,
    #[serde(default, alias = "sessionId")]
    pub session_id: Option<String>,
    #[serde(default, alias = "conversation_history", alias = "conversationHistory")]
    pub history: Option<Vec<HistoryEntry>>,
}

impl ChatInput {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Default::default()
        }
    }
}

/// `{"response": ..., "success": true}` or `{"success": false, "error": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatEnvelope {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip)]
    status: u16,
}

impl ChatEnvelope {
    pub fn success(response: impl Into<String>) -> Self {
        Self {
            response: Some(response.into()),
            success: true,
            error: None,
            status: 200,
        }
    }

    pub fn failure(err: &ChatError) -> Self {
        Self {
            response: None,
            success: false,
            error: Some(err.to_string()),
            status: err.status_code(),
        }
    }

    /// HTTP status to send with this body.
    pub fn status_code(&self) -> u16 {
        self.status
    }
}

impl From<Result<String, ChatError>> for ChatEnvelope {
    fn from(result: Result<String, ChatError>) -> Self {
        match result {
            Ok(text) => Self::success(text),
            Err(err) => Self::failure(&err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_body_has_no_error_field() {
        let json = serde_json::to_value(ChatEnvelope::success("Hi!")).unwrap();
        assert_eq!(json, serde_json::json!({ "response": "Hi!", "success": true }));
    }

    #[test]
    fn failure_body_has_no_response_field() {
        let result: Result<String, ChatError> = Err(ChatError::Provider("boom".into()));
        let envelope = ChatEnvelope::from(result);
        assert_eq!(envelope.status_code(), 502);

        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "success": false, "error": "Failed to get AI response: boom" })
        );
    }

    #[test]
    fn input_accepts_frontend_field_names() {
        let input: ChatInput = serde_json::from_str(
            r#"{
                "message": "Quiz me on loops",
                "sessionId": "s9",
                "conversationHistory": [
                    { "id": "welcome", "role": "assistant", "content": "Hello!" }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(input.message, "Quiz me on loops");
        assert_eq!(input.session_id.as_deref(), Some("s9"));
        assert_eq!(
            input.history,
            Some(vec![HistoryEntry::new("assistant", "Hello!")])
        );
    }

    #[test]
    fn input_history_entry_with_both_text_keys_still_decodes() {
        let input: ChatInput = serde_json::from_str(
            r#"{
                "message": "next",
                "history": [
                    { "role": "user", "text": "A", "content": "A (edited)" },
                    { "role": "assistant", "content": "B" }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(
            input.history,
            Some(vec![
                HistoryEntry::new("user", "A"),
                HistoryEntry::new("assistant", "B")
            ])
        );
    }

    #[test]
    fn input_without_optional_fields() {
        let input: ChatInput = serde_json::from_str(r#"{ "message": "hi" }"#).unwrap();
        assert_eq!(input, ChatInput::new("hi"));
    }

    #[test]
    fn input_without_message_decodes_empty() {
        let input: ChatInput = serde_json::from_str("{}").unwrap();
        assert!(input.message.is_empty());
    }
}
