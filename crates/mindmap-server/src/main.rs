//! Binary entry point: logging, config from the environment, serve.

use std::net::SocketAddr;

use anyhow::Context;
use mindmap_puzzle::PuzzleCatalog;
use mindmap_server::{AppState, build_router};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "mindmap_server=debug,tower_http=info".to_string()),
        )
        .init();

    let state = AppState::new(PuzzleCatalog::with_defaults());
    let app = build_router(state);

    let bind_addr: SocketAddr = std::env::var("MINDMAP_BIND")
        .unwrap_or_else(|_| "127.0.0.1:8001".to_string())
        .parse()
        .context("invalid MINDMAP_BIND")?;
    info!(%bind_addr, "mindmap server listening");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
