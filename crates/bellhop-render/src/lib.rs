//! Bellhop rendering.
//!
//! This crate defines the [`Renderer`] contract the orchestrator consumes —
//! a circuit diagram and an outcome histogram, each returned as an encoded
//! [`RenderedImage`] — plus a built-in deterministic SVG implementation.
//!
//! A renderer is a capability handed to the server at startup. Styling is
//! explicit per renderer instance ([`RenderStyle`]); there is no global
//! drawing context, so concurrent requests cannot interfere.
//!
//! ```rust
//! use bellhop_ir::{BellState, Circuit};
//! use bellhop_render::{Renderer, SvgRenderer};
//!
//! let renderer = SvgRenderer::default();
//! let image = renderer.draw_circuit(&Circuit::bell(BellState::PhiPlus)).unwrap();
//! assert!(image.to_data_uri().starts_with("data:image/svg+xml;base64,"));
//! ```

pub mod error;
pub mod renderer;
pub mod svg;

pub use error::{RenderError, RenderResult};
pub use renderer::{RenderStyle, RenderedImage, Renderer};
pub use svg::SvgRenderer;
