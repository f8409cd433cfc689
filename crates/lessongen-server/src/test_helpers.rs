use std::sync::Arc;

use axum::http::header;
use axum::response::Response;
use axum::Router;
use lessongen_core::Credential;
use lessongen_service::{CompletionClient, SecretStore};

use crate::routes::{build_router, AppState, InnerAppState};
use crate::session::SESSION_COOKIE;

/// App state around `client`, with `stored` standing in for the secrets file.
pub fn state_with(client: Arc<dyn CompletionClient>, stored: Option<Credential>) -> AppState {
    let secrets = match stored {
        Some(key) => {
            SecretStore::parse(&format!("[openai]\napi_key = \"{}\"\n", key.expose())).unwrap()
        }
        None => SecretStore::default(),
    };
    Arc::new(InnerAppState::new(client, secrets))
}

pub fn router_for(state: AppState) -> Router {
    build_router(state)
}

/// `name=value` of the session cookie `resp` sets, ready for a `Cookie` header.
pub fn session_cookie(resp: &Response) -> Option<String> {
    resp.headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with(SESSION_COOKIE))
        .and_then(|v| v.split(';').next())
        .map(str::to_string)
}
