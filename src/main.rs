mod api;
mod data;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};

/// Bind address for the HTTP server.
const BIND_ADDR: &str = "0.0.0.0:10000";

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(data::loader::default_dataset_path);

    // Load once at startup; failure here is fatal, the socket is never bound.
    let dataset = data::loader::load_csv(&path)
        .with_context(|| format!("loading dataset from {}", path.display()))?;
    log::info!(
        "Loaded {} champions ({} roles) from {}",
        dataset.len(),
        dataset.roles.len(),
        path.display()
    );
    if dataset.is_empty() {
        log::warn!("Dataset is empty; lookup endpoints will return 404");
    }

    let app = api::router(Arc::new(dataset));
    let listener = tokio::net::TcpListener::bind(BIND_ADDR)
        .await
        .with_context(|| format!("binding {BIND_ADDR}"))?;
    log::info!("Listening on {BIND_ADDR}");
    axum::serve(listener, app).await.context("serving HTTP")?;

    Ok(())
}
