//! The Bell-state catalog.
//!
//! Each of the four maximally entangled two-qubit states maps to a fixed
//! preparation sequence on qubits (0, 1). The sequences are static data so
//! they can be inspected, rendered, and executed without re-deriving them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::IrError;
use crate::gate::Gate;
use crate::qubit::QubitId;

/// A single catalog entry: a gate and the qubits it acts on.
pub type GateOp = (Gate, &'static [QubitId]);

const Q0: QubitId = QubitId(0);
const Q1: QubitId = QubitId(1);

const PHI_PLUS: &[GateOp] = &[(Gate::H, &[Q0]), (Gate::CX, &[Q0, Q1])];

const PHI_MINUS: &[GateOp] = &[(Gate::H, &[Q0]), (Gate::CX, &[Q0, Q1]), (Gate::Z, &[Q0])];

const PSI_PLUS: &[GateOp] = &[(Gate::X, &[Q1]), (Gate::H, &[Q0]), (Gate::CX, &[Q0, Q1])];

const PSI_MINUS: &[GateOp] = &[
    (Gate::X, &[Q1]),
    (Gate::H, &[Q0]),
    (Gate::CX, &[Q0, Q1]),
    (Gate::Z, &[Q0]),
];

/// The four canonical Bell states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BellState {
    /// (|00⟩ + |11⟩)/√2
    PhiPlus,
    /// (|00⟩ − |11⟩)/√2
    PhiMinus,
    /// (|01⟩ + |10⟩)/√2
    PsiPlus,
    /// (|01⟩ − |10⟩)/√2
    PsiMinus,
}

impl BellState {
    /// All four states, in catalog order.
    pub const ALL: [BellState; 4] = [
        BellState::PhiPlus,
        BellState::PhiMinus,
        BellState::PsiPlus,
        BellState::PsiMinus,
    ];

    /// Get the wire name of this state (as accepted by [`FromStr`]).
    pub fn as_str(&self) -> &'static str {
        match self {
            BellState::PhiPlus => "phi_plus",
            BellState::PhiMinus => "phi_minus",
            BellState::PsiPlus => "psi_plus",
            BellState::PsiMinus => "psi_minus",
        }
    }

    /// Get the display label of this state.
    pub fn label(&self) -> &'static str {
        match self {
            BellState::PhiPlus => "Φ+",
            BellState::PhiMinus => "Φ−",
            BellState::PsiPlus => "Ψ+",
            BellState::PsiMinus => "Ψ−",
        }
    }

    /// Get the fixed preparation sequence for this state on qubits (0, 1).
    ///
    /// Pure lookup: the same state always returns the same slice.
    pub fn gate_sequence(&self) -> &'static [GateOp] {
        match self {
            BellState::PhiPlus => PHI_PLUS,
            BellState::PhiMinus => PHI_MINUS,
            BellState::PsiPlus => PSI_PLUS,
            BellState::PsiMinus => PSI_MINUS,
        }
    }
}

impl FromStr for BellState {
    type Err = IrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "phi_plus" => Ok(BellState::PhiPlus),
            "phi_minus" => Ok(BellState::PhiMinus),
            "psi_plus" => Ok(BellState::PsiPlus),
            "psi_minus" => Ok(BellState::PsiMinus),
            other => Err(IrError::UnknownBellState(other.to_string())),
        }
    }
}

impl fmt::Display for BellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_sequences() {
        assert_eq!(
            BellState::PhiPlus.gate_sequence(),
            &[(Gate::H, &[Q0][..]), (Gate::CX, &[Q0, Q1][..])]
        );
        assert_eq!(
            BellState::PhiMinus.gate_sequence(),
            &[
                (Gate::H, &[Q0][..]),
                (Gate::CX, &[Q0, Q1][..]),
                (Gate::Z, &[Q0][..])
            ]
        );
        assert_eq!(
            BellState::PsiPlus.gate_sequence(),
            &[
                (Gate::X, &[Q1][..]),
                (Gate::H, &[Q0][..]),
                (Gate::CX, &[Q0, Q1][..])
            ]
        );
        assert_eq!(
            BellState::PsiMinus.gate_sequence(),
            &[
                (Gate::X, &[Q1][..]),
                (Gate::H, &[Q0][..]),
                (Gate::CX, &[Q0, Q1][..]),
                (Gate::Z, &[Q0][..])
            ]
        );
    }

    #[test]
    fn test_sequences_use_only_qubits_0_and_1() {
        for state in BellState::ALL {
            for (gate, qubits) in state.gate_sequence() {
                assert_eq!(gate.num_qubits() as usize, qubits.len());
                for q in *qubits {
                    assert!(q.0 < 2, "{state}: qubit {q} out of range");
                }
            }
        }
    }

    #[test]
    fn test_parse_round_trip() {
        for state in BellState::ALL {
            assert_eq!(state.as_str().parse::<BellState>().unwrap(), state);
        }
    }

    #[test]
    fn test_parse_unknown_state() {
        let err = "bogus".parse::<BellState>().unwrap_err();
        assert!(matches!(err, IrError::UnknownBellState(_)));
        // Case-sensitive on purpose: the wire format is lowercase.
        assert!("PHI_PLUS".parse::<BellState>().is_err());
    }
}
