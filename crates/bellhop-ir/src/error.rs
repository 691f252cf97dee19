//! Error types for the IR crate.

use crate::qubit::{ClbitId, QubitId};
use thiserror::Error;

/// Errors that can occur in IR operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// Qubit index outside the circuit.
    #[error("Qubit {qubit} out of range for {num_qubits}-qubit circuit")]
    QubitOutOfRange {
        /// The offending qubit.
        qubit: QubitId,
        /// Number of qubits in the circuit.
        num_qubits: u32,
    },

    /// Classical bit index outside the circuit.
    #[error("Classical bit {clbit} out of range for {num_clbits}-bit circuit")]
    ClbitOutOfRange {
        /// The offending classical bit.
        clbit: ClbitId,
        /// Number of classical bits in the circuit.
        num_clbits: u32,
    },

    /// Duplicate qubit in a multi-qubit operation.
    #[error("Duplicate qubit {0} in operation")]
    DuplicateQubit(QubitId),

    /// Operation applied after the final measurement.
    #[error("Cannot apply '{0}' after measurement")]
    OperationAfterMeasure(&'static str),

    /// Measurement operand counts do not match.
    #[error("Measurement maps {qubits} qubits to {clbits} classical bits")]
    MeasureArityMismatch {
        /// Number of measured qubits.
        qubits: usize,
        /// Number of target classical bits.
        clbits: usize,
    },

    /// Unrecognized Bell-state name.
    #[error(
        "Unknown Bell state '{0}' (expected one of: phi_plus, phi_minus, psi_plus, psi_minus)"
    )]
    UnknownBellState(String),
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
