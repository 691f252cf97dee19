//! Backend capability descriptions.

use serde::{Deserialize, Serialize};

/// Static capabilities of a backend.
///
/// Cached at backend construction time; `Backend::capabilities()` returns a
/// reference to this struct without I/O.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    /// Whether this backend is a simulator.
    pub is_simulator: bool,
    /// Maximum number of qubits the backend can execute.
    pub num_qubits: u32,
    /// Maximum shots per execution.
    pub max_shots: u32,
}

impl Capabilities {
    /// Capabilities of a local simulator with `num_qubits` qubits.
    pub fn simulator(num_qubits: u32) -> Self {
        Self {
            is_simulator: true,
            num_qubits,
            max_shots: u32::MAX,
        }
    }
}
