//! Bellhop backend abstraction layer.
//!
//! This crate defines what the orchestrator asks of a simulation backend and
//! how it interprets what comes back:
//!
//! - A common [`Backend`] trait for circuit execution
//! - [`Capabilities`] to describe backend limits
//! - Unified result handling via [`ExecutionResult`] and [`Counts`]
//!
//! # Example: running a circuit
//!
//! ```ignore
//! use bellhop_hal::Backend;
//! use bellhop_adapter_sim::SimulatorBackend;
//! use bellhop_ir::{BellState, Circuit};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let circuit = Circuit::bell(BellState::PhiPlus);
//!     let backend = SimulatorBackend::new();
//!
//!     let result = backend.execute(&circuit, 1024).await?;
//!     println!("counts: {:?}", result.counts);
//!     Ok(())
//! }
//! ```
//!
//! # Implementing a custom backend
//!
//! ```ignore
//! use bellhop_hal::{Backend, Capabilities, ExecutionResult, HalResult};
//! use bellhop_ir::Circuit;
//! use async_trait::async_trait;
//!
//! struct MyBackend {
//!     capabilities: Capabilities,
//! }
//!
//! #[async_trait]
//! impl Backend for MyBackend {
//!     fn name(&self) -> &str { "my_backend" }
//!
//!     // Sync, infallible — capabilities cached at construction.
//!     fn capabilities(&self) -> &Capabilities {
//!         &self.capabilities
//!     }
//!
//!     async fn execute(&self, circuit: &Circuit, shots: u32) -> HalResult<ExecutionResult> {
//!         // Run the circuit and count outcomes
//!         # todo!()
//!     }
//! }
//! ```

pub mod backend;
pub mod capability;
pub mod error;
pub mod result;

pub use backend::{Backend, BackendConfig};
pub use capability::Capabilities;
pub use error::{HalError, HalResult};
pub use result::{Counts, ExecutionResult};
