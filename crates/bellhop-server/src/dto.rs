//! Data Transfer Objects for the experiment API.
//!
//! These types bridge internal Bellhop structures to JSON-serializable API
//! requests and responses.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use bellhop_hal::Counts;

use crate::stats::Correlation;

/// Request to run a Bell-state experiment.
///
/// Both fields are optional; the handler substitutes defaults for missing
/// ones and validates the rest.
#[derive(Debug, Default, Deserialize)]
pub struct SimulateRequest {
    /// Bell-state name ("phi_plus", "phi_minus", "psi_plus", "psi_minus").
    pub state: Option<String>,
    /// Number of shots. Signed so that negative values can be rejected
    /// with a clear message instead of a deserialization failure.
    pub shots: Option<i64>,
}

/// Response from a Bell-state experiment.
#[derive(Debug, Serialize)]
pub struct SimulateResponse {
    /// Measurement counts with all four outcomes present, sorted by key.
    pub counts: BTreeMap<String, u64>,
    /// Signed two-decimal ZZ correlation, e.g. "+1.00".
    pub correlation: String,
    /// Circuit diagram as a base64 data URI.
    pub circuit_img: String,
    /// Measurement histogram as a base64 data URI.
    pub hist_img: String,
}

impl SimulateResponse {
    /// Assemble a response from experiment results.
    ///
    /// Expects counts already passed through [`crate::stats::canonical_counts`],
    /// so every basis outcome is present.
    pub fn new(counts: &Counts, correlation: Correlation, circuit_img: String, hist_img: String) -> Self {
        let counts = counts
            .iter()
            .map(|(outcome, count)| (outcome.to_string(), count))
            .collect();
        Self {
            counts,
            correlation: correlation.to_string(),
            circuit_img,
            hist_img,
        }
    }
}

/// Response for the health endpoint.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status (always "ok" if responding).
    pub status: String,
    /// Server version.
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
