//! Built-in SVG renderer.
//!
//! Produces self-contained SVG documents for circuit diagrams and outcome
//! histograms. Output is deterministic: the same circuit or counts always
//! yield byte-identical images.

use std::fmt::Write;

use bellhop_hal::Counts;
use bellhop_ir::{Circuit, Gate, Instruction, InstructionKind};

use crate::error::{RenderError, RenderResult};
use crate::renderer::{RenderStyle, RenderedImage, Renderer};

const SVG_MEDIA_TYPE: &str = "image/svg+xml";

// Circuit layout constants (pixels).
const COL_WIDTH: f64 = 64.0;
const ROW_HEIGHT: f64 = 70.0;
const MARGIN_X: f64 = 56.0;
const MARGIN_Y: f64 = 48.0;
const GATE_HALF: f64 = 18.0;

// Histogram layout constants (pixels).
const HIST_WIDTH: f64 = 460.0;
const HIST_HEIGHT: f64 = 360.0;
const HIST_MARGIN: f64 = 48.0;

/// SVG renderer with explicit styling.
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    style: RenderStyle,
    max_qubits: u32,
}

impl SvgRenderer {
    /// Create a renderer with the given style.
    pub fn new(style: RenderStyle) -> Self {
        Self {
            style,
            max_qubits: 8,
        }
    }

    fn wire_y(qubit: u32) -> f64 {
        MARGIN_Y + f64::from(qubit) * ROW_HEIGHT + ROW_HEIGHT / 2.0
    }

    fn col_x(column: usize) -> f64 {
        MARGIN_X + (column as f64) * COL_WIDTH + COL_WIDTH / 2.0
    }

    fn draw_gate_box(&self, svg: &mut String, x: f64, y: f64, label: &str) -> RenderResult<()> {
        writeln!(
            svg,
            r##"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" rx="4" fill="{}" stroke="{}"/>"##,
            x - GATE_HALF,
            y - GATE_HALF,
            GATE_HALF * 2.0,
            GATE_HALF * 2.0,
            self.style.accent,
            self.style.foreground,
        )?;
        writeln!(
            svg,
            r##"<text x="{x:.1}" y="{:.1}" text-anchor="middle" font-family="monospace" font-size="16" fill="{}">{label}</text>"##,
            y + 5.0,
            self.style.background,
        )?;
        Ok(())
    }

    fn draw_cx(&self, svg: &mut String, x: f64, control: u32, target: u32) -> RenderResult<()> {
        let cy = Self::wire_y(control);
        let ty = Self::wire_y(target);
        writeln!(
            svg,
            r##"<line x1="{x:.1}" y1="{cy:.1}" x2="{x:.1}" y2="{ty:.1}" stroke="{}" stroke-width="2"/>"##,
            self.style.accent,
        )?;
        writeln!(
            svg,
            r##"<circle cx="{x:.1}" cy="{cy:.1}" r="5" fill="{}"/>"##,
            self.style.accent,
        )?;
        writeln!(
            svg,
            r##"<circle cx="{x:.1}" cy="{ty:.1}" r="11" fill="none" stroke="{}" stroke-width="2"/>"##,
            self.style.accent,
        )?;
        writeln!(
            svg,
            r##"<line x1="{:.1}" y1="{ty:.1}" x2="{:.1}" y2="{ty:.1}" stroke="{}" stroke-width="2"/>"##,
            x - 11.0,
            x + 11.0,
            self.style.accent,
        )?;
        writeln!(
            svg,
            r##"<line x1="{x:.1}" y1="{:.1}" x2="{x:.1}" y2="{:.1}" stroke="{}" stroke-width="2"/>"##,
            ty - 11.0,
            ty + 11.0,
            self.style.accent,
        )?;
        Ok(())
    }

    fn draw_measure(&self, svg: &mut String, x: f64, qubit: u32) -> RenderResult<()> {
        let y = Self::wire_y(qubit);
        writeln!(
            svg,
            r##"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" rx="4" fill="none" stroke="{}" stroke-width="2"/>"##,
            x - GATE_HALF,
            y - GATE_HALF,
            GATE_HALF * 2.0,
            GATE_HALF * 2.0,
            self.style.foreground,
        )?;
        // Meter glyph: an arc with a needle.
        writeln!(
            svg,
            r##"<path d="M {:.1} {:.1} A 12 12 0 0 1 {:.1} {:.1}" fill="none" stroke="{}" stroke-width="2"/>"##,
            x - 12.0,
            y + 8.0,
            x + 12.0,
            y + 8.0,
            self.style.foreground,
        )?;
        writeln!(
            svg,
            r##"<line x1="{x:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-width="2"/>"##,
            y + 8.0,
            x + 8.0,
            y - 8.0,
            self.style.foreground,
        )?;
        Ok(())
    }

    /// Assign each instruction to a column: the earliest column after every
    /// prior operation on any of its qubits.
    fn layout(circuit: &Circuit) -> Vec<(usize, &Instruction)> {
        let mut qubit_depth = vec![0usize; circuit.num_qubits() as usize];
        let mut placed = Vec::with_capacity(circuit.instructions().len());

        for instruction in circuit.instructions() {
            let column = instruction
                .qubits
                .iter()
                .map(|q| qubit_depth[q.0 as usize])
                .max()
                .unwrap_or(0);
            for q in &instruction.qubits {
                qubit_depth[q.0 as usize] = column + 1;
            }
            placed.push((column, instruction));
        }

        placed
    }
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new(RenderStyle::default())
    }
}

impl Renderer for SvgRenderer {
    fn draw_circuit(&self, circuit: &Circuit) -> RenderResult<RenderedImage> {
        if circuit.num_qubits() > self.max_qubits {
            return Err(RenderError::TooManyQubits(
                circuit.num_qubits(),
                self.max_qubits,
            ));
        }

        let placed = Self::layout(circuit);
        let num_columns = placed.iter().map(|(c, _)| c + 1).max().unwrap_or(1);
        let width = MARGIN_X * 2.0 + (num_columns as f64) * COL_WIDTH;
        let height = MARGIN_Y * 2.0 + f64::from(circuit.num_qubits()) * ROW_HEIGHT;

        let mut svg = String::new();
        writeln!(
            svg,
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="{width:.0}" height="{height:.0}" viewBox="0 0 {width:.0} {height:.0}">"##,
        )?;
        writeln!(
            svg,
            r##"<rect width="100%" height="100%" fill="{}"/>"##,
            self.style.background,
        )?;

        // Wires and labels.
        for q in 0..circuit.num_qubits() {
            let y = Self::wire_y(q);
            writeln!(
                svg,
                r##"<text x="{:.1}" y="{:.1}" text-anchor="end" font-family="monospace" font-size="14" fill="{}">q{q}</text>"##,
                MARGIN_X - 12.0,
                y + 5.0,
                self.style.foreground,
            )?;
            writeln!(
                svg,
                r##"<line x1="{MARGIN_X:.1}" y1="{y:.1}" x2="{:.1}" y2="{y:.1}" stroke="{}" stroke-width="1.5"/>"##,
                width - MARGIN_X,
                self.style.foreground,
            )?;
        }

        for (column, instruction) in placed {
            let x = Self::col_x(column);
            match &instruction.kind {
                InstructionKind::Gate(Gate::CX) => {
                    self.draw_cx(&mut svg, x, instruction.qubits[0].0, instruction.qubits[1].0)?;
                }
                InstructionKind::Gate(gate) => {
                    self.draw_gate_box(&mut svg, x, Self::wire_y(instruction.qubits[0].0), gate.label())?;
                }
                InstructionKind::Measure => {
                    for q in &instruction.qubits {
                        self.draw_measure(&mut svg, x, q.0)?;
                    }
                }
            }
        }

        writeln!(svg, "</svg>")?;
        Ok(RenderedImage::new(SVG_MEDIA_TYPE, svg.into_bytes()))
    }

    fn draw_histogram(&self, counts: &Counts) -> RenderResult<RenderedImage> {
        let mut outcomes: Vec<(&str, u64)> = counts.iter().collect();
        outcomes.sort_by_key(|(bitstring, _)| *bitstring);

        if let Some((first, _)) = outcomes.first()
            && let Some((other, _)) = outcomes.iter().find(|(k, _)| k.len() != first.len())
        {
            return Err(RenderError::MixedBitstringWidths(first.len(), other.len()));
        }

        let total = counts.total();
        let plot_w = HIST_WIDTH - 2.0 * HIST_MARGIN;
        let plot_h = HIST_HEIGHT - 2.0 * HIST_MARGIN;
        let base_y = HIST_HEIGHT - HIST_MARGIN;

        let mut svg = String::new();
        writeln!(
            svg,
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="{HIST_WIDTH:.0}" height="{HIST_HEIGHT:.0}" viewBox="0 0 {HIST_WIDTH:.0} {HIST_HEIGHT:.0}">"##,
        )?;
        writeln!(
            svg,
            r##"<rect width="100%" height="100%" fill="{}"/>"##,
            self.style.background,
        )?;
        // Baseline.
        writeln!(
            svg,
            r##"<line x1="{HIST_MARGIN:.1}" y1="{base_y:.1}" x2="{:.1}" y2="{base_y:.1}" stroke="{}" stroke-width="1.5"/>"##,
            HIST_WIDTH - HIST_MARGIN,
            self.style.foreground,
        )?;

        let num_bars = outcomes.len().max(1);
        let slot_w = plot_w / num_bars as f64;
        let bar_w = slot_w * 0.6;

        for (i, (bitstring, count)) in outcomes.iter().enumerate() {
            let probability = if total > 0 {
                *count as f64 / total as f64
            } else {
                0.0
            };
            let bar_h = probability * plot_h;
            let x = HIST_MARGIN + (i as f64) * slot_w + (slot_w - bar_w) / 2.0;

            writeln!(
                svg,
                r##"<rect x="{x:.1}" y="{:.1}" width="{bar_w:.1}" height="{bar_h:.1}" fill="{}"/>"##,
                base_y - bar_h,
                self.style.accent,
            )?;
            writeln!(
                svg,
                r##"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-family="monospace" font-size="14" fill="{}">{bitstring}</text>"##,
                x + bar_w / 2.0,
                base_y + 20.0,
                self.style.foreground,
            )?;
            writeln!(
                svg,
                r##"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-family="monospace" font-size="12" fill="{}">{count}</text>"##,
                x + bar_w / 2.0,
                base_y - bar_h - 8.0,
                self.style.foreground,
            )?;
        }

        writeln!(svg, "</svg>")?;
        Ok(RenderedImage::new(SVG_MEDIA_TYPE, svg.into_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bellhop_ir::BellState;

    fn svg_text(image: &RenderedImage) -> String {
        String::from_utf8(image.bytes.clone()).unwrap()
    }

    #[test]
    fn test_circuit_render_is_deterministic() {
        let renderer = SvgRenderer::default();
        let circuit = Circuit::bell(BellState::PsiMinus);

        let a = renderer.draw_circuit(&circuit).unwrap();
        let b = renderer.draw_circuit(&circuit).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.media_type, "image/svg+xml");
    }

    #[test]
    fn test_circuit_render_does_not_alter_circuit() {
        let renderer = SvgRenderer::default();
        let circuit = Circuit::bell(BellState::PhiMinus);
        let before = circuit.clone();

        renderer.draw_circuit(&circuit).unwrap();
        assert_eq!(circuit, before);
    }

    #[test]
    fn test_circuit_svg_contains_gates_and_wires() {
        let renderer = SvgRenderer::default();
        let circuit = Circuit::bell(BellState::PsiPlus);

        let svg = svg_text(&renderer.draw_circuit(&circuit).unwrap());
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(">X<"));
        assert!(svg.contains(">H<"));
        assert!(svg.contains(">q0<"));
        assert!(svg.contains(">q1<"));
    }

    #[test]
    fn test_too_many_qubits() {
        let renderer = SvgRenderer::default();
        let circuit = Circuit::with_size("wide", 32, 32);
        let err = renderer.draw_circuit(&circuit).unwrap_err();
        assert!(matches!(err, RenderError::TooManyQubits(32, _)));
    }

    #[test]
    fn test_histogram_orders_outcomes() {
        let renderer = SvgRenderer::default();
        let mut counts = Counts::new();
        counts.insert("11", 512);
        counts.insert("00", 512);

        let svg = svg_text(&renderer.draw_histogram(&counts).unwrap());
        let pos_00 = svg.find(">00<").unwrap();
        let pos_11 = svg.find(">11<").unwrap();
        assert!(pos_00 < pos_11);
    }

    #[test]
    fn test_histogram_empty_counts() {
        let renderer = SvgRenderer::default();
        let image = renderer.draw_histogram(&Counts::new()).unwrap();
        assert!(svg_text(&image).starts_with("<svg"));
    }

    #[test]
    fn test_histogram_rejects_mixed_widths() {
        let renderer = SvgRenderer::default();
        let mut counts = Counts::new();
        counts.insert("00", 1);
        counts.insert("000", 1);
        let err = renderer.draw_histogram(&counts).unwrap_err();
        assert!(matches!(err, RenderError::MixedBitstringWidths(2, 3)));
    }

    #[test]
    fn test_data_uri_media_type() {
        let renderer = SvgRenderer::default();
        let circuit = Circuit::bell(BellState::PhiPlus);
        let uri = renderer.draw_circuit(&circuit).unwrap().to_data_uri();
        assert!(uri.starts_with("data:image/svg+xml;base64,"));
    }
}
