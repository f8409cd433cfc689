use async_trait::async_trait;
use lessongen_core::{Credential, Difficulty, GenerationError};
use lessongen_prompts::{build_messages, ChatMessage};
use serde::{Deserialize, Serialize};

/// Fixed sampling parameters for every request.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSettings {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            model: "gpt-3.5-turbo".into(),
            max_tokens: 1200,
            temperature: 0.7,
        }
    }
}

/// Body of a chat-completion call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f64,
}

impl CompletionRequest {
    pub fn new(settings: &GenerationSettings, difficulty: Difficulty, request: &str) -> Self {
        Self {
            model: settings.model.clone(),
            messages: build_messages(difficulty, request),
            max_tokens: settings.max_tokens,
            temperature: settings.temperature,
        }
    }
}

/// A chat-completion backend.
///
/// `OpenAiClient` talks to the hosted API over HTTP.
/// `MockCompletion` returns canned results for tests.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    fn name(&self) -> &str;

    /// Return the message content of the first choice, as received.
    async fn complete(
        &self,
        credential: &Credential,
        request: &CompletionRequest,
    ) -> Result<String, GenerationError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use lessongen_prompts::Role;

    #[test]
    fn default_settings() {
        let s = GenerationSettings::default();
        assert_eq!(s.model, "gpt-3.5-turbo");
        assert_eq!(s.max_tokens, 1200);
        assert!((s.temperature - 0.7).abs() < f64::EPSILON);
    }

    #[test]
    fn request_wire_shape() {
        let req = CompletionRequest::new(
            &GenerationSettings::default(),
            Difficulty::Beginner,
            "분수의 덧셈을 설명해줘",
        );
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(v["model"], "gpt-3.5-turbo");
        assert_eq!(v["max_tokens"], 1200);
        assert_eq!(v["messages"][0]["role"], "system");
        assert_eq!(v["messages"][1]["role"], "user");
        assert_eq!(v["messages"][1]["content"], "분수의 덧셈을 설명해줘");
        assert_eq!(req.messages[0].role, Role::System);
    }
}
