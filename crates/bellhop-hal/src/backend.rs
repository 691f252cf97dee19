//! Backend trait and configuration.
//!
//! The [`Backend`] trait is the single trust boundary between the
//! orchestrator and whatever executes circuits:
//!
//! ```text
//!   capabilities() ──→ execute()
//!    (sync, &ref)       (async)
//! ```
//!
//! ## Design principles
//!
//! - **Async-native**: execution may cross a process or network boundary.
//! - **Thread-safe**: `Send + Sync` bound enables shared ownership across
//!   concurrently served requests.
//! - **Infallible introspection**: `capabilities()` is synchronous and
//!   infallible — a backend that cannot report capabilities without I/O is
//!   not correctly initialized.
//! - **Faults are values**: every failure mode surfaces as [`HalError`];
//!   a backend must not panic the caller.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

use bellhop_ir::Circuit;

use crate::capability::Capabilities;
use crate::error::HalResult;
use crate::result::ExecutionResult;

/// Configuration for a backend instance.
#[derive(Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Name of the backend.
    pub name: String,
    /// Additional configuration.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl BackendConfig {
    /// Create a new backend configuration.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extra: serde_json::Map::new(),
        }
    }

    /// Add extra configuration.
    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

impl fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackendConfig")
            .field("name", &self.name)
            .field("extra", &self.extra)
            .finish()
    }
}

/// Trait for circuit-execution backends.
///
/// # Contract
///
/// - `capabilities()` MUST be synchronous and infallible. Capabilities MUST
///   be cached at construction time.
/// - `execute()` runs the circuit for exactly `shots` repetitions and
///   returns outcome counts whose total equals `shots`. `shots == 0` is
///   legal and MUST return an empty count map, not an error.
/// - Implementations MUST NOT retain request state between calls; the
///   orchestrator shares one backend handle across concurrent requests.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Get the name of this backend.
    fn name(&self) -> &str;

    /// Get the capabilities of this backend.
    fn capabilities(&self) -> &Capabilities;

    /// Execute a circuit for `shots` repetitions and return outcome counts.
    async fn execute(&self, circuit: &Circuit, shots: u32) -> HalResult<ExecutionResult>;
}
