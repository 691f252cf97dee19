//! Execution results and outcome counts.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Measurement outcome counts, keyed by classical bitstring.
///
/// A key that was never recorded reads as count 0, so consumers never have
/// to care which outcomes a backend chose to include.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counts(FxHashMap<String, u64>);

impl Counts {
    /// Create an empty counts map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `count` additional observations of `bitstring`.
    pub fn insert(&mut self, bitstring: impl Into<String>, count: u64) {
        *self.0.entry(bitstring.into()).or_insert(0) += count;
    }

    /// Get the count for a bitstring (0 if absent).
    pub fn get(&self, bitstring: &str) -> u64 {
        self.0.get(bitstring).copied().unwrap_or(0)
    }

    /// Total observations across all outcomes.
    pub fn total(&self) -> u64 {
        self.0.values().sum()
    }

    /// Number of distinct outcomes recorded.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check whether no outcome has been recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over (bitstring, count) pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// The most frequent outcome, if any.
    pub fn most_frequent(&self) -> Option<(&str, u64)> {
        self.0
            .iter()
            .max_by_key(|(_, count)| **count)
            .map(|(k, v)| (k.as_str(), *v))
    }
}

impl FromIterator<(String, u64)> for Counts {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        let mut counts = Counts::new();
        for (bitstring, count) in iter {
            counts.insert(bitstring, count);
        }
        counts
    }
}

/// The result of executing a circuit for a number of shots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Outcome counts. For a successful run, `counts.total()` equals `shots`.
    pub counts: Counts,
    /// Number of shots that were executed.
    pub shots: u32,
    /// Wall-clock execution time in milliseconds, if measured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_time_ms: Option<u64>,
}

impl ExecutionResult {
    /// Create a new execution result.
    pub fn new(counts: Counts, shots: u32) -> Self {
        Self {
            counts,
            shots,
            execution_time_ms: None,
        }
    }

    /// Attach the execution time.
    #[must_use]
    pub fn with_execution_time(mut self, millis: u64) -> Self {
        self.execution_time_ms = Some(millis);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_accumulate() {
        let mut counts = Counts::new();
        counts.insert("00", 1);
        counts.insert("00", 2);
        counts.insert("11", 5);

        assert_eq!(counts.get("00"), 3);
        assert_eq!(counts.get("11"), 5);
        assert_eq!(counts.total(), 8);
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn test_missing_key_reads_zero() {
        let counts = Counts::new();
        assert_eq!(counts.get("01"), 0);
        assert!(counts.is_empty());
        assert!(counts.most_frequent().is_none());
    }

    #[test]
    fn test_most_frequent() {
        let counts: Counts = [("00".to_string(), 700), ("11".to_string(), 324)]
            .into_iter()
            .collect();
        assert_eq!(counts.most_frequent(), Some(("00", 700)));
    }

    #[test]
    fn test_execution_result() {
        let mut counts = Counts::new();
        counts.insert("00", 512);
        counts.insert("11", 512);

        let result = ExecutionResult::new(counts, 1024).with_execution_time(3);
        assert_eq!(result.counts.total(), u64::from(result.shots));
        assert_eq!(result.execution_time_ms, Some(3));
    }
}
