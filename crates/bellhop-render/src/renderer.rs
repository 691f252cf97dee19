//! Renderer trait, output type, and styling.

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use serde::{Deserialize, Serialize};

use bellhop_hal::Counts;
use bellhop_ir::Circuit;

use crate::error::RenderResult;

/// An encoded image produced by a renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedImage {
    /// IANA media type of `bytes` (e.g. `image/svg+xml`, `image/png`).
    pub media_type: &'static str,
    /// The raw encoded image.
    pub bytes: Vec<u8>,
}

impl RenderedImage {
    /// Create a rendered image.
    pub fn new(media_type: &'static str, bytes: Vec<u8>) -> Self {
        Self { media_type, bytes }
    }

    /// Encode as a `data:<media-type>;base64,<payload>` URI for embedding.
    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.media_type, BASE64.encode(&self.bytes))
    }
}

/// Explicit styling for a render call.
///
/// Carried by value into every renderer so rendering never depends on shared
/// mutable styling state; concurrent requests cannot observe each other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStyle {
    /// Canvas background color.
    pub background: String,
    /// Wire, axis, and text color.
    pub foreground: String,
    /// Accent color for gate boxes and histogram bars.
    pub accent: String,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            background: "#0f172a".to_string(),
            foreground: "#ffffff".to_string(),
            accent: "#22d3ee".to_string(),
        }
    }
}

/// Trait for circuit and histogram renderers.
///
/// # Contract
///
/// - Both methods MUST be pure with respect to their inputs: rendering a
///   circuit never mutates it, and repeated calls yield identical output.
/// - Implementations MUST be safe to share across concurrently served
///   requests (`Send + Sync`, no interior styling state).
pub trait Renderer: Send + Sync {
    /// Draw a circuit diagram.
    fn draw_circuit(&self, circuit: &Circuit) -> RenderResult<RenderedImage>;

    /// Draw an outcome histogram.
    fn draw_histogram(&self, counts: &Counts) -> RenderResult<RenderedImage>;
}
