use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use lessongen_core::{Difficulty, FormState, Outcome};
use lessongen_service::resolve_credential;
use serde::Deserialize;
use serde_json::{json, Value};

use super::{run_generation, to_error, AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/generate", post(generate))
}

#[derive(Debug, Deserialize)]
pub struct GenerateBody {
    pub difficulty: String,
    pub prompt: String,
    #[serde(default)]
    pub api_key: Option<String>,
}

/// Stateless variant of the page's generate action. Does not touch the
/// page's displayed result.
async fn generate(
    State(state): State<AppState>,
    Json(input): Json<GenerateBody>,
) -> Result<(StatusCode, Json<Value>), (StatusCode, Json<Value>)> {
    let difficulty = Difficulty::from_str(&input.difficulty).ok_or_else(|| {
        to_error(
            StatusCode::BAD_REQUEST,
            format!("unknown difficulty: {}", input.difficulty),
        )
    })?;

    let credential = resolve_credential(&state.secrets, input.api_key.as_deref().unwrap_or(""));
    let mut form = FormState::new(credential);
    form.difficulty = difficulty;
    form.request = input.prompt;
    let request = form
        .begin_generation(None)
        .map_err(|e| to_error(StatusCode::BAD_REQUEST, e.to_string()))?;

    let material = run_generation(state.client.clone(), request).await;
    let body = match &material.outcome {
        Outcome::Ok { content } => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "content": content,
                "difficulty": material.difficulty.as_str(),
                "generated_at": material.generated_at,
            })),
        ),
        Outcome::Error { error } => (
            StatusCode::BAD_GATEWAY,
            Json(json!({
                "status": "error",
                "error": error,
                "display": error.display_text(),
            })),
        ),
    };
    Ok(body)
}
