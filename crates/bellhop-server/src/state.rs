//! Application state for the experiment server.

use std::net::SocketAddr;
use std::sync::Arc;

use bellhop_hal::Backend;
use bellhop_render::Renderer;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind the server to.
    pub bind_address: SocketAddr,
    /// Shots used when a request does not specify them.
    pub default_shots: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: ([127, 0, 0, 1], 3000).into(),
            default_shots: 1024,
        }
    }
}

/// Shared application state.
pub struct AppState {
    /// Backend that executes circuits.
    pub backend: Arc<dyn Backend>,
    /// Renderer for circuit diagrams and histograms.
    pub renderer: Arc<dyn Renderer>,
    /// Server configuration.
    pub config: ServerConfig,
}

impl AppState {
    /// Create application state with default configuration.
    pub fn new(backend: Arc<dyn Backend>, renderer: Arc<dyn Renderer>) -> Self {
        Self::with_config(ServerConfig::default(), backend, renderer)
    }

    /// Create application state with custom configuration.
    pub fn with_config(
        config: ServerConfig,
        backend: Arc<dyn Backend>,
        renderer: Arc<dyn Renderer>,
    ) -> Self {
        Self {
            backend,
            renderer,
            config,
        }
    }
}
