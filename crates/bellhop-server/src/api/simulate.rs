//! Bell-state experiment endpoint.

use std::sync::Arc;

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use tracing::info;

use bellhop_ir::{BellState, Circuit};

use crate::dto::{SimulateRequest, SimulateResponse};
use crate::error::ApiError;
use crate::state::AppState;
use crate::stats::{Correlation, canonical_counts};

/// POST /simulate - Run a Bell-state experiment and return counts,
/// correlation, and rendered images.
pub async fn simulate(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SimulateRequest>, JsonRejection>,
) -> Result<Json<SimulateResponse>, ApiError> {
    // A malformed body gets the same error shape as any other bad request.
    let Json(req) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let bell: BellState = req
        .state
        .as_deref()
        .unwrap_or(BellState::PhiPlus.as_str())
        .parse()?;
    let shots = validate_shots(req.shots, state.config.default_shots)?;

    let circuit = Circuit::bell(bell);

    let result = state.backend.execute(&circuit, shots).await?;
    let counts = canonical_counts(&result.counts);
    let correlation = Correlation::from_counts(&counts);

    let circuit_img = state.renderer.draw_circuit(&circuit)?.to_data_uri();
    let hist_img = state.renderer.draw_histogram(&counts)?.to_data_uri();

    info!(
        state = %bell,
        shots,
        correlation = %correlation,
        "experiment complete"
    );

    Ok(Json(SimulateResponse::new(
        &counts,
        correlation,
        circuit_img,
        hist_img,
    )))
}

/// Resolve the shot count, substituting the default when absent.
fn validate_shots(requested: Option<i64>, default: u32) -> Result<u32, ApiError> {
    match requested {
        None => Ok(default),
        Some(n) if n < 0 => Err(ApiError::BadRequest(format!(
            "shots must be non-negative, got {n}"
        ))),
        Some(n) => u32::try_from(n)
            .map_err(|_| ApiError::BadRequest(format!("shots too large: {n}"))),
    }
}
