//! Bellhop server - Web interface for Bell-state experiments.
//!
//! This crate exposes a small HTTP API around the Bellhop simulation stack:
//!
//! - `POST /simulate` runs one of the four Bell-state circuits on a backend
//!   and returns measurement counts, the ZZ-parity correlation, and rendered
//!   images of the circuit and the counts histogram
//! - `GET /api/health` reports liveness and the server version
//! - `/` serves an embedded single-page frontend
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use bellhop_adapter_sim::SimulatorBackend;
//! use bellhop_render::SvgRenderer;
//! use bellhop_server::{AppState, ServerConfig, create_router};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig::default();
//!     let bind = config.bind_address;
//!     let state = Arc::new(AppState::with_config(
//!         config,
//!         Arc::new(SimulatorBackend::new()),
//!         Arc::new(SvgRenderer::default()),
//!     ));
//!
//!     let app = create_router(state);
//!     let listener = tokio::net::TcpListener::bind(bind).await.unwrap();
//!     axum::serve(listener, app).await.unwrap();
//! }
//! ```

pub mod api;
pub mod dto;
pub mod error;
pub mod server;
pub mod state;
pub mod stats;

pub use dto::{HealthResponse, SimulateRequest, SimulateResponse};
pub use error::ApiError;
pub use server::create_router;
pub use state::{AppState, ServerConfig};
pub use stats::{Correlation, canonical_counts};
