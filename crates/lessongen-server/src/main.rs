use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use lessongen_server::config::ServerConfig;
use lessongen_service::{OpenAiClient, SecretStore};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::parse();

    let secrets = SecretStore::load(&config.secrets);
    if secrets.openai_api_key().is_some() {
        info!("using API key from {}", config.secrets.display());
    } else {
        info!("no stored API key; the page will ask for one");
    }

    let client = OpenAiClient::with_timeout(&config.api_base_url, config.request_timeout())
        .context("build HTTP client")?;
    info!("completion API: {}", client.base_url());

    let addr = config.addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("bind {addr}"))?;
    info!("lessongen-server listening on http://{addr}");

    lessongen_server::serve(listener, Arc::new(client), secrets).await
}
