//! High-level circuit builder API.

use serde::{Deserialize, Serialize};

use crate::bell::BellState;
use crate::error::{IrError, IrResult};
use crate::gate::Gate;
use crate::instruction::Instruction;
use crate::qubit::{ClbitId, QubitId};

/// A quantum circuit as an ordered instruction list.
///
/// Instructions execute in insertion order. Once a measurement has been
/// appended the circuit is sealed: further gates are rejected, which keeps
/// the "measurement is always final" invariant a construction-time property
/// instead of something every consumer has to re-check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    /// Name of the circuit.
    name: String,
    /// Number of qubits.
    num_qubits: u32,
    /// Number of classical bits.
    num_clbits: u32,
    /// Ordered instructions.
    instructions: Vec<Instruction>,
}

impl Circuit {
    /// Create a circuit with a given number of qubits and classical bits.
    pub fn with_size(name: impl Into<String>, num_qubits: u32, num_clbits: u32) -> Self {
        Self {
            name: name.into(),
            num_qubits,
            num_clbits,
            instructions: vec![],
        }
    }

    fn check_qubits(&self, qubits: &[QubitId]) -> IrResult<()> {
        for (i, q) in qubits.iter().enumerate() {
            if q.0 >= self.num_qubits {
                return Err(IrError::QubitOutOfRange {
                    qubit: *q,
                    num_qubits: self.num_qubits,
                });
            }
            if qubits[..i].contains(q) {
                return Err(IrError::DuplicateQubit(*q));
            }
        }
        Ok(())
    }

    fn apply_gate(&mut self, gate: Gate, qubits: &[QubitId]) -> IrResult<&mut Self> {
        if self.is_measured() {
            return Err(IrError::OperationAfterMeasure(gate.name()));
        }
        self.check_qubits(qubits)?;
        self.instructions
            .push(Instruction::gate(gate, qubits.iter().copied()));
        Ok(self)
    }

    /// Apply Hadamard gate.
    pub fn h(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply_gate(Gate::H, &[qubit])
    }

    /// Apply Pauli-X gate.
    pub fn x(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply_gate(Gate::X, &[qubit])
    }

    /// Apply Pauli-Z gate.
    pub fn z(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply_gate(Gate::Z, &[qubit])
    }

    /// Apply CNOT (CX) gate.
    pub fn cx(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.apply_gate(Gate::CX, &[control, target])
    }

    /// Measure qubits into classical bits, pairwise.
    pub fn measure(
        &mut self,
        qubits: impl IntoIterator<Item = QubitId>,
        clbits: impl IntoIterator<Item = ClbitId>,
    ) -> IrResult<&mut Self> {
        if self.is_measured() {
            return Err(IrError::OperationAfterMeasure("measure"));
        }
        let qubits: Vec<_> = qubits.into_iter().collect();
        let clbits: Vec<_> = clbits.into_iter().collect();
        if qubits.len() != clbits.len() {
            return Err(IrError::MeasureArityMismatch {
                qubits: qubits.len(),
                clbits: clbits.len(),
            });
        }
        self.check_qubits(&qubits)?;
        for c in &clbits {
            if c.0 >= self.num_clbits {
                return Err(IrError::ClbitOutOfRange {
                    clbit: *c,
                    num_clbits: self.num_clbits,
                });
            }
        }
        self.instructions.push(Instruction::measure(qubits, clbits));
        Ok(self)
    }

    /// Measure every qubit into the classical bit with the same index.
    pub fn measure_all(&mut self) -> IrResult<&mut Self> {
        let qubits: Vec<_> = (0..self.num_qubits).map(QubitId).collect();
        let clbits: Vec<_> = (0..self.num_clbits).map(ClbitId).collect();
        self.measure(qubits, clbits)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the circuit name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Get the number of classical bits.
    pub fn num_clbits(&self) -> u32 {
        self.num_clbits
    }

    /// Get the ordered instructions.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Get the number of gate operations (measurements excluded).
    pub fn num_gates(&self) -> usize {
        self.instructions.iter().filter(|i| i.is_gate()).count()
    }

    /// Check whether the circuit ends in a measurement.
    pub fn is_measured(&self) -> bool {
        self.instructions.last().is_some_and(Instruction::is_measure)
    }

    // =========================================================================
    // Pre-built circuits
    // =========================================================================

    /// Build the preparation-and-measurement circuit for a Bell state.
    ///
    /// The gate sequence is the catalog entry for `state` followed by a
    /// measurement mapping qubit 0 → clbit 0 and qubit 1 → clbit 1. The same
    /// description is handed to both the backend and the renderer, so what is
    /// drawn and what is executed are the same object.
    pub fn bell(state: BellState) -> Circuit {
        let mut circuit = Self::with_size(state.as_str(), 2, 2);
        for (gate, qubits) in state.gate_sequence() {
            // Catalog sequences are closed data over qubits {0, 1}; the
            // builder checks cannot fail for them.
            circuit
                .apply_gate(*gate, qubits)
                .unwrap_or_else(|e| panic!("catalog sequence invalid: {e}"));
        }
        circuit
            .measure_all()
            .unwrap_or_else(|e| panic!("catalog sequence invalid: {e}"));
        circuit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fluent_api() {
        let mut circuit = Circuit::with_size("test", 2, 2);
        circuit
            .h(QubitId(0))
            .unwrap()
            .cx(QubitId(0), QubitId(1))
            .unwrap()
            .measure_all()
            .unwrap();

        assert_eq!(circuit.num_gates(), 2);
        assert!(circuit.is_measured());
    }

    #[test]
    fn test_qubit_out_of_range() {
        let mut circuit = Circuit::with_size("test", 2, 2);
        let err = circuit.h(QubitId(5)).unwrap_err();
        assert!(matches!(err, IrError::QubitOutOfRange { .. }));
    }

    #[test]
    fn test_duplicate_qubit_rejected() {
        let mut circuit = Circuit::with_size("test", 2, 2);
        let err = circuit.cx(QubitId(0), QubitId(0)).unwrap_err();
        assert!(matches!(err, IrError::DuplicateQubit(QubitId(0))));
    }

    #[test]
    fn test_no_gates_after_measure() {
        let mut circuit = Circuit::with_size("test", 2, 2);
        circuit.h(QubitId(0)).unwrap().measure_all().unwrap();

        let err = circuit.x(QubitId(1)).unwrap_err();
        assert!(matches!(err, IrError::OperationAfterMeasure("x")));
    }

    #[test]
    fn test_bell_circuits_match_catalog() {
        for state in BellState::ALL {
            let circuit = Circuit::bell(state);
            assert_eq!(circuit.num_qubits(), 2);
            assert_eq!(circuit.num_clbits(), 2);

            let seq = state.gate_sequence();
            let instructions = circuit.instructions();
            assert_eq!(instructions.len(), seq.len() + 1);

            for (inst, (gate, qubits)) in instructions.iter().zip(seq) {
                assert_eq!(inst.as_gate(), Some(*gate));
                assert_eq!(inst.qubits, *qubits);
            }

            let measure = instructions.last().unwrap();
            assert!(measure.is_measure());
            assert_eq!(measure.qubits, [QubitId(0), QubitId(1)]);
            assert_eq!(measure.clbits, [ClbitId(0), ClbitId(1)]);
        }
    }

    #[test]
    fn test_bell_is_deterministic() {
        for state in BellState::ALL {
            assert_eq!(Circuit::bell(state), Circuit::bell(state));
        }
    }
}
