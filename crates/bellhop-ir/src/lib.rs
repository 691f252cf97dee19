//! Bellhop circuit representation.
//!
//! This crate provides the data model for Bell-state experiments: a closed
//! catalog of the four Bell states, the small gate set that prepares them,
//! and an ordered-instruction [`Circuit`] type shared by backends and
//! renderers.
//!
//! # Example: building a Bell circuit
//!
//! ```rust
//! use bellhop_ir::{BellState, Circuit};
//!
//! let circuit = Circuit::bell(BellState::PhiPlus);
//!
//! assert_eq!(circuit.num_qubits(), 2);
//! assert_eq!(circuit.num_gates(), 2); // H, CX
//! assert!(circuit.is_measured());
//! ```
//!
//! # Catalog
//!
//! | State | Preparation |
//! |-------|-------------|
//! | `phi_plus` | H(0), CX(0,1) |
//! | `phi_minus` | H(0), CX(0,1), Z(0) |
//! | `psi_plus` | X(1), H(0), CX(0,1) |
//! | `psi_minus` | X(1), H(0), CX(0,1), Z(0) |

pub mod bell;
pub mod circuit;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod qubit;

pub use bell::{BellState, GateOp};
pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::Gate;
pub use instruction::{Instruction, InstructionKind};
pub use qubit::{ClbitId, QubitId};
