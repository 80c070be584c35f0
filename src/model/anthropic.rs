use async_trait::async_trait;
use log::{debug, info};
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::config::ProviderConfig;

use super::{Completion, CompletionProvider, CompletionRequest, ProviderError};

const API_VERSION: &str = "2023-06-01";

// Client for the Anthropic Messages API
pub struct AnthropicClient {
    base_url: String,
    api_key: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    #[serde(rename = "type")]
    kind: String,
    message: String,
}

impl AnthropicClient {
    pub fn new(config: &ProviderConfig) -> Result<Self, ProviderError> {
        info!("Using Anthropic API at: {}", config.base_url);

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            info!("Provider request timeout: {}s", timeout.as_secs());
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            client: builder.build()?,
        })
    }

    fn messages_url(&self) -> String {
        format!("{}/v1/messages", self.base_url)
    }
}

#[async_trait]
impl CompletionProvider for AnthropicClient {
    async fn complete(&self, request: &CompletionRequest<'_>) -> Result<Completion, ProviderError> {
        info!(
            "Sending {} messages to model {} with max_tokens: {}",
            request.messages.len(),
            request.model,
            request.max_tokens
        );

        let response = self
            .client
            .post(self.messages_url())
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!("Provider responded with {}: {}", status, body);

        if !status.is_success() {
            return Err(api_error(status, &body));
        }

        serde_json::from_str(&body).map_err(|e| ProviderError::Decode(e.to_string()))
    }
}

fn api_error(status: StatusCode, body: &str) -> ProviderError {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => ProviderError::Api {
            status: status.as_u16(),
            kind: envelope.error.kind,
            message: envelope.error.message,
        },
        Err(_) => ProviderError::Api {
            status: status.as_u16(),
            kind: "api_error".to_string(),
            message: if body.trim().is_empty() {
                status.canonical_reason().unwrap_or("no response body").to_string()
            } else {
                body.trim().to_string()
            },
        },
    }
}
