//! Bellhop local statevector simulator.
//!
//! This crate provides the default execution backend: an exact statevector
//! simulation of the Bell-state gate set (H, X, Z, CX) with probabilistic
//! measurement sampling.
//!
//! Each shot evolves a fresh statevector through the circuit's instruction
//! list and samples one computational-basis outcome, so the returned counts
//! always sum to the requested shot count.
//!
//! # Example
//!
//! ```ignore
//! use bellhop_adapter_sim::SimulatorBackend;
//! use bellhop_hal::Backend;
//! use bellhop_ir::{BellState, Circuit};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = SimulatorBackend::new();
//!     let circuit = Circuit::bell(BellState::PhiPlus);
//!
//!     // Expect ~50% |00⟩ and ~50% |11⟩
//!     let result = backend.execute(&circuit, 1000).await?;
//!     println!("Results: {:?}", result.counts);
//!
//!     Ok(())
//! }
//! ```

mod simulator;
mod statevector;

pub use simulator::SimulatorBackend;
