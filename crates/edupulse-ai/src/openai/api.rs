//! AiClient trait implementation for OpenAiClient.

use async_trait::async_trait;
use tracing::debug;

use crate::{AiClient, AiError, AiResponse, Message, ProviderSelection};

use super::client::OpenAiClient;

/// Status line plus the head of the provider's error body.
async fn failure_detail(status: reqwest::StatusCode, response: reqwest::Response) -> String {
    let text = response.text().await.unwrap_or_default();
    let text = text.chars().take(200).collect::<String>();
    format!("HTTP {status}: {text}")
}

fn transport_error(e: reqwest::Error) -> AiError {
    if e.is_timeout() {
        AiError::Timeout
    } else {
        AiError::NetworkError(e.to_string())
    }
}

#[async_trait]
impl AiClient for OpenAiClient {
    async fn send_message(
        &self,
        selection: &ProviderSelection,
        messages: &[Message],
    ) -> Result<AiResponse, AiError> {
        let body = self.build_request_body(selection, messages);

        debug!(provider = %selection.provider, model = %selection.model, "Chat completions request");

        let response = self
            .http
            .post(self.completions_url())
            .bearer_auth(self.config.credential.expose())
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(AiError::RateLimited(failure_detail(status, response).await));
        }
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(AiError::Unauthorized(failure_detail(status, response).await));
        }
        if !status.is_success() {
            return Err(AiError::ApiError(failure_detail(status, response).await));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AiError::ParseError(e.to_string()))?;

        self.parse_response(json)
    }
}
