//! Bellhop server binary entry point.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bellhop_adapter_sim::SimulatorBackend;
use bellhop_hal::Backend;
use bellhop_render::SvgRenderer;
use bellhop_server::{AppState, ServerConfig, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bellhop_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Create configuration
    let mut config = ServerConfig::default();
    if let Ok(bind) = std::env::var("BELLHOP_BIND") {
        config.bind_address = bind
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid BELLHOP_BIND address '{bind}': {e}"))?;
    }
    let bind_addr = config.bind_address;

    // Create application state with the local simulator and SVG renderer
    let backend = Arc::new(SimulatorBackend::new());
    tracing::info!(backend = backend.name(), "Initialized backend");
    let state = Arc::new(AppState::with_config(
        config,
        backend,
        Arc::new(SvgRenderer::default()),
    ));

    // Create the router
    let app = create_router(state);

    // Start the server
    tracing::info!("Starting Bellhop server at http://{}", bind_addr);
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
