//! campus-paths-server entrypoint.

use std::sync::Arc;

use anyhow::Context;
use campus_paths_server::{build_router, load_map, Settings};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::parse();
    tracing::info!("Starting campus-paths server...");

    let source = settings.data_source();
    let state = load_map(&source).with_context(|| {
        format!(
            "loading {} and {}",
            source.buildings.display(),
            source.paths.display()
        )
    })?;

    let app = build_router(Arc::new(state));

    let addr = settings.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, app).await?;
    Ok(())
}
