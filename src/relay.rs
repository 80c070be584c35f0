use std::sync::Arc;

use log::{debug, error, info};

use crate::config::ProviderConfig;
use crate::error::RelayError;
use crate::model::{CompletionProvider, CompletionRequest, ProviderError};
use crate::web::models::{ChatRequest, ChatResponse, Turn};

/// Forwards a message plus caller-held history to the provider and hands
/// back the reply with the extended history. Holds no per-request state.
pub struct Relay {
    provider: Arc<dyn CompletionProvider>,
    model: String,
    system_prompt: String,
    max_tokens: u32,
}

impl Relay {
    pub fn new(provider: Arc<dyn CompletionProvider>, config: &ProviderConfig) -> Self {
        Self {
            provider,
            model: config.model.clone(),
            system_prompt: config.system_prompt.clone(),
            max_tokens: config.max_tokens,
        }
    }

    pub async fn handle_chat(&self, request: ChatRequest) -> Result<ChatResponse, RelayError> {
        validate(&request)?;

        let mut history = request.conversation_history.unwrap_or_default();
        info!("Chat request with {} prior turns", history.len());
        debug!("Message: {}", request.message);

        history.push(Turn::user(request.message));

        let completion = self
            .provider
            .complete(&CompletionRequest {
                model: &self.model,
                max_tokens: self.max_tokens,
                system: &self.system_prompt,
                messages: &history,
            })
            .await
            .map_err(|e| {
                error!("Provider error: {}", e);
                RelayError::from(e)
            })?;

        let reply = completion
            .first_text()
            .ok_or_else(|| {
                error!("Provider returned no text content");
                RelayError::from(ProviderError::EmptyContent)
            })?
            .to_string();

        info!("Reply length: {} characters", reply.len());
        history.push(Turn::assistant(reply.clone()));

        Ok(ChatResponse {
            reply,
            updated_history: history,
        })
    }
}

fn validate(request: &ChatRequest) -> Result<(), RelayError> {
    if request.message.trim().is_empty() {
        return Err(RelayError::Validation("message must not be empty".to_string()));
    }
    Ok(())
}
