//! OpenAI-compatible client struct, request building, and response parsing.

use crate::{AiError, AiResponse, Message, ProviderSelection, TokenUsage};

use super::config::OpenAiConfig;

/// OpenAI-compatible Chat Completions client.
pub struct OpenAiClient {
    pub(crate) config: OpenAiConfig,
    pub(crate) http: reqwest::Client,
}

impl OpenAiClient {
    pub fn new(config: OpenAiConfig) -> Result<Self, AiError> {
        let mut builder = reqwest::Client::builder().connect_timeout(config.connect_timeout);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| AiError::ApiError(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    pub(crate) fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url)
    }

    /// Build the JSON request body for the Chat Completions API.
    pub(crate) fn build_request_body(
        &self,
        selection: &ProviderSelection,
        messages: &[Message],
    ) -> serde_json::Value {
        serde_json::json!({
            "model": selection.model,
            "messages": messages,
            "max_tokens": self.config.max_tokens,
            "temperature": self.config.temperature,
        })
    }

    /// Parse a non-streaming response.
    pub(crate) fn parse_response(&self, json: serde_json::Value) -> Result<AiResponse, AiError> {
        if let Some(message) = json["error"]["message"].as_str() {
            return Err(AiError::ApiError(message.to_string()));
        }

        let first = json["choices"]
            .as_array()
            .and_then(|choices| choices.first())
            .ok_or_else(|| AiError::ParseError("no choices in response".to_string()))?;

        let content = first["message"]["content"]
            .as_str()
            .ok_or_else(|| AiError::ParseError("choice has no text content".to_string()))?
            .to_string();

        let usage = TokenUsage {
            input_tokens: json["usage"]["prompt_tokens"].as_u64().unwrap_or(0),
            output_tokens: json["usage"]["completion_tokens"].as_u64().unwrap_or(0),
        };

        Ok(AiResponse { content, usage })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Role;
    use edupulse_config::{AssistantConfig, Credential};

    fn client() -> OpenAiClient {
        let credential = Credential::new("sk-test").unwrap();
        OpenAiClient::new(OpenAiConfig::from_assistant(&AssistantConfig::default(), credential))
            .unwrap()
    }

    #[test]
    fn request_body_keeps_message_order() {
        let messages = vec![
            Message::new(Role::System, "be kind"),
            Message::new(Role::User, "A"),
            Message::new(Role::Assistant, "B"),
            Message::new(Role::User, "C"),
        ];
        let body = client().build_request_body(&ProviderSelection::default(), &messages);

        assert_eq!(body["model"], "gpt-4o-mini");
        let sent = body["messages"].as_array().unwrap();
        let order: Vec<_> = sent
            .iter()
            .map(|m| (m["role"].as_str().unwrap(), m["content"].as_str().unwrap()))
            .collect();
        assert_eq!(
            order,
            vec![
                ("system", "be kind"),
                ("user", "A"),
                ("assistant", "B"),
                ("user", "C")
            ]
        );
    }

    #[test]
    fn parse_text_and_usage() {
        let json = serde_json::json!({
            "choices": [{ "message": { "role": "assistant", "content": "Recursion is..." } }],
            "usage": { "prompt_tokens": 12, "completion_tokens": 30 }
        });
        let response = client().parse_response(json).unwrap();
        assert_eq!(response.content, "Recursion is...");
        assert_eq!(response.usage.total_tokens(), 42);
    }

    #[test]
    fn parse_without_choices_is_parse_error() {
        let json = serde_json::json!({ "choices": [] });
        let err = client().parse_response(json).unwrap_err();
        assert!(matches!(err, AiError::ParseError(_)));
    }

    #[test]
    fn parse_null_content_is_parse_error() {
        let json = serde_json::json!({ "choices": [{ "message": { "content": null } }] });
        assert!(matches!(
            client().parse_response(json),
            Err(AiError::ParseError(_))
        ));
    }

    #[test]
    fn parse_error_object_is_api_error() {
        let json = serde_json::json!({ "error": { "message": "model not found" } });
        let err = client().parse_response(json).unwrap_err();
        assert_eq!(err.to_string(), "API error: model not found");
    }
}
