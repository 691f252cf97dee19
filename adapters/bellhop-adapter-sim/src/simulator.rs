//! Simulator backend implementation.

use async_trait::async_trait;
use std::time::Instant;
use tracing::{debug, instrument};

use bellhop_hal::{
    Backend, BackendConfig, Capabilities, Counts, ExecutionResult, HalError, HalResult,
};
use bellhop_ir::Circuit;

use crate::statevector::Statevector;

const DEFAULT_MAX_QUBITS: u32 = 8;

/// Local statevector simulator backend.
///
/// Executes circuits shot by shot: each repetition evolves a fresh
/// statevector and samples one outcome. Stateless with respect to request
/// data, so one instance can serve concurrent requests.
pub struct SimulatorBackend {
    /// Backend configuration.
    config: BackendConfig,
    /// Capabilities, cached at construction.
    capabilities: Capabilities,
}

impl SimulatorBackend {
    /// Create a new simulator backend with default settings.
    pub fn new() -> Self {
        Self::with_max_qubits(DEFAULT_MAX_QUBITS)
    }

    /// Create a simulator with a custom qubit limit.
    pub fn with_max_qubits(max_qubits: u32) -> Self {
        Self {
            config: BackendConfig::new("simulator"),
            capabilities: Capabilities::simulator(max_qubits),
        }
    }

    #[instrument(skip(self, circuit), fields(circuit = circuit.name()))]
    fn run_simulation(&self, circuit: &Circuit, shots: u32) -> ExecutionResult {
        let start = Instant::now();
        let num_qubits = circuit.num_qubits() as usize;
        debug!("Starting simulation: {} qubits, {} shots", num_qubits, shots);

        let mut counts = Counts::new();
        for _ in 0..shots {
            let mut sv = Statevector::new(num_qubits);
            for instruction in circuit.instructions() {
                sv.apply(instruction);
            }
            let outcome = sv.sample();
            counts.insert(sv.bitstring(outcome), 1);
        }

        let elapsed = start.elapsed();
        debug!("Simulation completed in {:?}", elapsed);

        ExecutionResult::new(counts, shots).with_execution_time(elapsed.as_millis() as u64)
    }
}

impl Default for SimulatorBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Backend for SimulatorBackend {
    fn name(&self) -> &str {
        &self.config.name
    }

    fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    async fn execute(&self, circuit: &Circuit, shots: u32) -> HalResult<ExecutionResult> {
        if circuit.num_qubits() > self.capabilities.num_qubits {
            return Err(HalError::CircuitTooLarge(format!(
                "Circuit has {} qubits but simulator only supports {}",
                circuit.num_qubits(),
                self.capabilities.num_qubits
            )));
        }

        Ok(self.run_simulation(circuit, shots))
    }
}
