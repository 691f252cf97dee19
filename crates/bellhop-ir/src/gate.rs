//! Quantum gate types.
//!
//! The gate set is deliberately closed: Bell-state preparation needs exactly
//! Hadamard, the X and Z Paulis, and CNOT. Exhaustive matches over [`Gate`]
//! keep every consumer (simulator, renderer) checkable at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Gates used by the Bell-state catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gate {
    /// Identity gate.
    I,
    /// Pauli-X gate (bit flip).
    X,
    /// Pauli-Z gate (phase flip).
    Z,
    /// Hadamard gate.
    H,
    /// Controlled-X (CNOT) gate, control first.
    CX,
}

impl Gate {
    /// Get the lowercase name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Gate::I => "id",
            Gate::X => "x",
            Gate::Z => "z",
            Gate::H => "h",
            Gate::CX => "cx",
        }
    }

    /// Get the display label of this gate.
    #[inline]
    pub fn label(&self) -> &'static str {
        match self {
            Gate::I => "I",
            Gate::X => "X",
            Gate::Z => "Z",
            Gate::H => "H",
            Gate::CX => "CX",
        }
    }

    /// Get the number of qubits this gate operates on.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        match self {
            Gate::I | Gate::X | Gate::Z | Gate::H => 1,
            Gate::CX => 2,
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_properties() {
        assert_eq!(Gate::H.num_qubits(), 1);
        assert_eq!(Gate::CX.num_qubits(), 2);
        assert_eq!(Gate::H.name(), "h");
        assert_eq!(Gate::CX.label(), "CX");
    }
}
