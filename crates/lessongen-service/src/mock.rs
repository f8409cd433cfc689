use std::sync::Mutex;

use async_trait::async_trait;
use lessongen_core::{Credential, FailureKind, GenerationError};

use crate::client::{CompletionClient, CompletionRequest};

/// A canned completion backend. Records every request it receives.
pub struct MockCompletion {
    result: Result<String, GenerationError>,
    calls: Mutex<Vec<CompletionRequest>>,
}

impl MockCompletion {
    /// Always answers with `content`.
    pub fn success(content: &str) -> Self {
        Self {
            result: Ok(content.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Always fails with the given kind and message.
    pub fn failure(kind: FailureKind, message: &str) -> Self {
        Self {
            result: Err(GenerationError::new(kind, message)),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|c| c.len()).unwrap_or(0)
    }

    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.calls.lock().ok().and_then(|c| c.last().cloned())
    }
}

#[async_trait]
impl CompletionClient for MockCompletion {
    fn name(&self) -> &str {
        "mock"
    }

    async fn complete(
        &self,
        _credential: &Credential,
        request: &CompletionRequest,
    ) -> Result<String, GenerationError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(request.clone());
        }
        self.result.clone()
    }
}
