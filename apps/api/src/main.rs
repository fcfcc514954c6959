mod config;
mod cors;
mod errors;
mod report;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::report::assets::ReportAssets;
use crate::report::renderer::{ChromiumRenderer, PdfRenderer};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Lumispect PDF API v{}", env!("CARGO_PKG_VERSION"));

    // Load logo images once; missing files degrade to blank substitutions.
    let assets = Arc::new(ReportAssets::load(&config.assets_dir));

    // Each request launches its own isolated Chromium instance.
    let renderer: Arc<dyn PdfRenderer> = Arc::new(ChromiumRenderer);

    let state = AppState {
        config: config.clone(),
        assets,
        renderer,
    };

    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
