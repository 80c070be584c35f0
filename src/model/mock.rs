use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use super::{Completion, CompletionProvider, CompletionRequest, ContentSegment, ProviderError};

pub enum Outcome {
    Reply(String),
    NoContent,
    Fail(String),
}

/// Scripted provider that records how often it was called.
pub struct MockProvider {
    outcome: Outcome,
    calls: AtomicUsize,
}

impl MockProvider {
    pub fn replying(text: &str) -> Self {
        Self::new(Outcome::Reply(text.to_string()))
    }

    pub fn empty() -> Self {
        Self::new(Outcome::NoContent)
    }

    pub fn failing(message: &str) -> Self {
        Self::new(Outcome::Fail(message.to_string()))
    }

    fn new(outcome: Outcome) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionProvider for MockProvider {
    async fn complete(&self, _request: &CompletionRequest<'_>) -> Result<Completion, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match &self.outcome {
            Outcome::Reply(text) => Ok(Completion {
                content: vec![ContentSegment::Text { text: text.clone() }],
            }),
            Outcome::NoContent => Ok(Completion {
                content: vec![ContentSegment::Other],
            }),
            Outcome::Fail(message) => Err(ProviderError::Api {
                status: 529,
                kind: "overloaded_error".to_string(),
                message: message.clone(),
            }),
        }
    }
}
