pub mod config;
pub mod render;
mod routes;
pub mod session;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

use std::sync::Arc;

use anyhow::Result;
use lessongen_service::{CompletionClient, SecretStore};
use tokio::net::TcpListener;

pub use routes::{build_router, AppState, InnerAppState};

pub async fn serve(
    listener: TcpListener,
    client: Arc<dyn CompletionClient>,
    secrets: SecretStore,
) -> Result<()> {
    let state = Arc::new(InnerAppState::new(client, secrets));
    let app = build_router(state);
    axum::serve(listener, app).await?;
    Ok(())
}
