use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::web::models::Turn;

pub mod anthropic;
#[cfg(test)]
pub mod mock;

pub use anthropic::AnthropicClient;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{kind} (HTTP {status}): {message}")]
    Api {
        status: u16,
        kind: String,
        message: String,
    },
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("response contained no text content")]
    EmptyContent,
}

/// Body of a single completion call.
#[derive(Debug, Serialize)]
pub struct CompletionRequest<'a> {
    pub model: &'a str,
    pub max_tokens: u32,
    pub system: &'a str,
    pub messages: &'a [Turn],
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentSegment {
    Text { text: String },
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Completion {
    #[serde(default)]
    pub content: Vec<ContentSegment>,
}

impl Completion {
    /// First text segment of the completion, skipping non-text blocks.
    pub fn first_text(&self) -> Option<&str> {
        self.content.iter().find_map(|segment| match segment {
            ContentSegment::Text { text } => Some(text.as_str()),
            ContentSegment::Other => None,
        })
    }
}

#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, request: &CompletionRequest<'_>) -> Result<Completion, ProviderError>;
}
