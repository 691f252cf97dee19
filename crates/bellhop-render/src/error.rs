//! Error types for the render crate.

use thiserror::Error;

/// Errors that can occur while rendering.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RenderError {
    /// Circuit is too wide for the renderer.
    #[error("Cannot render {0}-qubit circuit (renderer supports up to {1})")]
    TooManyQubits(u32, u32),

    /// Outcome bitstrings of mixed width cannot share one histogram axis.
    #[error("Inconsistent bitstring widths in counts: {0} and {1}")]
    MixedBitstringWidths(usize, usize),

    /// Formatting the output failed.
    #[error("Formatting error: {0}")]
    Format(#[from] std::fmt::Error),
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
