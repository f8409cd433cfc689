pub mod api;
pub mod download;
pub mod health;
pub mod page;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::{Json, Router};
use lessongen_core::{GenerationRequest, Material, Outcome};
use lessongen_service::{generate_material, CompletionClient, SecretStore};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::session::SessionStore;

pub struct InnerAppState {
    pub client: Arc<dyn CompletionClient>,
    pub secrets: SecretStore,
    pub sessions: SessionStore,
}

impl InnerAppState {
    pub fn new(client: Arc<dyn CompletionClient>, secrets: SecretStore) -> Self {
        let sessions = SessionStore::new(secrets.openai_api_key());
        Self {
            client,
            secrets,
            sessions,
        }
    }
}

pub type AppState = Arc<InnerAppState>;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(page::routes())
        .merge(download::routes())
        .merge(api::routes())
        .merge(health::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run one completion call and wrap the result for display.
pub(crate) async fn run_generation(
    client: Arc<dyn CompletionClient>,
    request: GenerationRequest,
) -> Material {
    let result = generate_material(
        client.as_ref(),
        &request.credential,
        request.difficulty,
        &request.prompt,
    )
    .await;
    Material::new(request.difficulty, request.prompt, Outcome::from(result))
}

/// Run a generation for the page and store the result in the session's form.
///
/// The call runs in its own task so the result still lands in the form
/// if the browser gives up on the request.
pub(crate) async fn generate_for_page(state: &AppState, session: &str, request: GenerationRequest) {
    let task_state = state.clone();
    let session = session.to_string();
    let handle = tokio::spawn(async move {
        let material = run_generation(task_state.client.clone(), request).await;
        task_state
            .sessions
            .with_form(&session, |form| form.complete(material));
    });
    if let Err(e) = handle.await {
        error!("generation task failed: {e}");
    }
}

pub(crate) fn to_error(status: StatusCode, msg: impl Into<String>) -> (StatusCode, Json<Value>) {
    (status, Json(json!({ "error": msg.into() })))
}
