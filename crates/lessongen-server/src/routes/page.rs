use axum::extract::{Form, State};
use axum::response::Html;
use axum::routing::{get, post};
use axum::Router;
use axum_extra::extract::cookie::CookieJar;
use lessongen_core::{Credential, Difficulty};
use serde::Deserialize;
use tracing::info;

use super::{generate_for_page, AppState};
use crate::render::{render_page, PageView};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(show_page))
        .route("/generate", post(generate))
}

#[derive(Debug, Deserialize)]
pub struct GenerateForm {
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub api_key: Option<String>,
}

async fn show_page(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Html<String>) {
    let (jar, session) = state.sessions.identify(jar);
    let view = state
        .sessions
        .with_form(&session, |form| PageView::from_form(form, None, None));
    (jar, Html(render_page(&view)))
}

async fn generate(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(input): Form<GenerateForm>,
) -> (CookieJar, Html<String>) {
    let (jar, session) = state.sessions.identify(jar);
    // Used for this submission only.
    let entered = input.api_key.as_deref().and_then(Credential::new);

    let begun = state.sessions.with_form(&session, |form| {
        if let Some(d) = Difficulty::from_str(&input.difficulty) {
            form.difficulty = d;
        }
        form.request = input.prompt;
        form.begin_generation(entered.as_ref())
    });

    let notice = match begun {
        Ok(request) => {
            info!(difficulty = request.difficulty.as_str(), "generate button pressed");
            generate_for_page(&state, &session, request).await;
            None
        }
        Err(e) => {
            info!("generation refused: {e}");
            Some(e.to_string())
        }
    };

    let view = state
        .sessions
        .with_form(&session, |form| PageView::from_form(form, entered.as_ref(), notice));
    (jar, Html(render_page(&view)))
}
