use lessongen_core::{Credential, Difficulty, GenerationError};
use tracing::{info, warn};

use crate::client::{CompletionClient, CompletionRequest, GenerationSettings};

/// Ask the model for learning material.
///
/// Builds the system instruction for `difficulty`, sends `prompt` verbatim
/// as the user message, and returns the first choice trimmed.
pub async fn generate_material(
    client: &dyn CompletionClient,
    credential: &Credential,
    difficulty: Difficulty,
    prompt: &str,
) -> Result<String, GenerationError> {
    let request = CompletionRequest::new(&GenerationSettings::default(), difficulty, prompt);
    info!(
        backend = client.name(),
        model = %request.model,
        difficulty = difficulty.as_str(),
        prompt_chars = prompt.chars().count(),
        "requesting learning material"
    );
    match client.complete(credential, &request).await {
        Ok(content) => {
            let trimmed = content.trim().to_string();
            info!(chars = trimmed.chars().count(), "learning material generated");
            Ok(trimmed)
        }
        Err(e) => {
            warn!(kind = e.kind.as_str(), "generation failed: {e}");
            Err(e)
        }
    }
}

/// Same as [`generate_material`], but folds a failure into `오류 발생: <detail>`.
pub async fn generate_display_text(
    client: &dyn CompletionClient,
    credential: &Credential,
    difficulty: Difficulty,
    prompt: &str,
) -> String {
    match generate_material(client, credential, difficulty, prompt).await {
        Ok(text) => text,
        Err(e) => e.display_text(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockCompletion;
    use lessongen_core::FailureKind;

    fn key() -> Credential {
        Credential::new("sk-valid").unwrap()
    }

    #[tokio::test]
    async fn success_is_trimmed_only() {
        let mock = MockCompletion::success("\n\n  1. ... 2. ... 3. ...  \n");
        let out = generate_material(&mock, &key(), Difficulty::Beginner, "분수의 덧셈을 설명해줘")
            .await
            .unwrap();
        assert_eq!(out, "1. ... 2. ... 3. ...");
    }

    #[tokio::test]
    async fn inner_whitespace_untouched() {
        let mock = MockCompletion::success(" a\n\n  b \t c ");
        let out = generate_material(&mock, &key(), Difficulty::Advanced, "x")
            .await
            .unwrap();
        assert_eq!(out, "a\n\n  b \t c");
    }

    #[tokio::test]
    async fn request_carries_difficulty_and_prompt() {
        let mock = MockCompletion::success("ok");
        generate_material(&mock, &key(), Difficulty::Intermediate, "분수의 덧셈을 설명해줘")
            .await
            .unwrap();
        let req = mock.last_request().unwrap();
        assert_eq!(req.model, "gpt-3.5-turbo");
        assert_eq!(req.max_tokens, 1200);
        assert!(req.messages[0].content.contains("연습 문제(중급 난이도)"));
        assert_eq!(req.messages[1].content, "분수의 덧셈을 설명해줘");
    }

    #[tokio::test]
    async fn rate_limit_display_text_exact() {
        let mock = MockCompletion::failure(FailureKind::RateLimited, "rate limit exceeded");
        let out = generate_display_text(&mock, &key(), Difficulty::Beginner, "q").await;
        assert_eq!(out, "오류 발생: rate limit exceeded");
    }

    #[tokio::test]
    async fn every_failure_kind_is_prefixed() {
        for kind in [
            FailureKind::Network,
            FailureKind::Authentication,
            FailureKind::RateLimited,
            FailureKind::MalformedResponse,
            FailureKind::Api,
        ] {
            let mock = MockCompletion::failure(kind, "detail");
            let out = generate_display_text(&mock, &key(), Difficulty::Beginner, "q").await;
            assert!(out.starts_with("오류 발생: "), "{out}");
        }
    }

    #[tokio::test]
    async fn typed_error_preserved() {
        let mock = MockCompletion::failure(FailureKind::Authentication, "bad key");
        let err = generate_material(&mock, &key(), Difficulty::Beginner, "q")
            .await
            .unwrap_err();
        assert_eq!(err.kind, FailureKind::Authentication);
        assert_eq!(err.to_string(), "bad key");
    }
}
