//! Result renderers: plain text, JSON and an SVG section diagram.

use std::fmt::Write;

use beamcalc_core::diagram::SectionDiagram;
use beamcalc_core::history::SizingLog;
use beamcalc_core::{CalcError, SizingInput, SizingResult};
use serde_json::json;

use super::ResultRenderer;

const RULE: &str = "═══════════════════════════════════════";

/// Human-readable report.
pub struct TextRenderer;

impl ResultRenderer for TextRenderer {
    fn render(&self, input: &SizingInput, result: &SizingResult) -> String {
        let bbox = &input.bounding_box;
        let mut out = String::new();

        let _ = writeln!(out, "{}", RULE);
        let _ = writeln!(out, "  BEAM SIZING RESULTS ({})", input.label);
        let _ = writeln!(out, "{}", RULE);
        let _ = writeln!(out);
        let _ = writeln!(out, "Input:");
        let _ = writeln!(
            out,
            "  Box:      ({}, {}) - ({}, {})",
            bbox.x_min, bbox.y_min, bbox.x_max, bbox.y_max
        );
        let _ = writeln!(out, "  Span:     {:.3}", result.span);
        let _ = writeln!(out, "  Load:     {}", input.load_case.uniform_distributed_load);
        let _ = writeln!(
            out,
            "  Material: E = {}, σ_allow = {}",
            input.material.modulus_of_elasticity, input.material.allowable_bending_stress
        );
        let _ = writeln!(out);
        let _ = writeln!(out, "Requirements:");
        let _ = writeln!(out, "  δ_allow = L/360 = {:.5}", result.max_allowed_deflection);
        let _ = writeln!(out, "  I_req   = {:.5}", result.required_moment_of_inertia);
        let _ = writeln!(out, "  S_req   = {:.5}", result.required_section_modulus);
        let _ = writeln!(out);
        let _ = writeln!(out, "Required section:");
        let _ = writeln!(out, "  Depth:   {:.3}", result.depth);
        let _ = writeln!(out, "  Width:   {:.3}", result.width);

        if let (Some(shear), Some(deflection)) = (result.shear_stress, result.max_deflection) {
            let _ = writeln!(out);
            let _ = writeln!(out, "Checks:");
            let _ = writeln!(out, "  Shear stress:   {:.3}", shear);
            let _ = writeln!(
                out,
                "  Max deflection: {:.6} (limit {:.6}) {}",
                deflection,
                result.max_allowed_deflection,
                status_icon(result.passes())
            );
            if let Some(ratio) = result.deflection_ratio() {
                let _ = writeln!(out, "  Deflection ratio: L/{:.0} (limit L/360)", ratio);
            }
        }
        let _ = writeln!(out, "{}", RULE);
        out
    }

    fn render_error(&self, input: &SizingInput, error: &CalcError) -> String {
        format!("Error [{}] sizing {}: {}\n", error.error_code(), input.label, error)
    }

    fn render_history(&self, log: &SizingLog) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Session history ({} results)", log.len());
        let _ = writeln!(
            out,
            "{:<8} {:>9} {:>9} {:>9} {:>9} {:>10} {:>9} {:>9}",
            "label", "x_min", "y_min", "x_max", "y_max", "load", "depth", "width"
        );
        for record in log.records() {
            let bbox = &record.input.bounding_box;
            let _ = writeln!(
                out,
                "{:<8} {:>9.3} {:>9.3} {:>9.3} {:>9.3} {:>10.3} {:>9.3} {:>9.3}",
                record.input.label,
                bbox.x_min,
                bbox.y_min,
                bbox.x_max,
                bbox.y_max,
                record.input.load_case.uniform_distributed_load,
                record.result.depth,
                record.result.width
            );
        }
        out
    }
}

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]" } else { "[FAIL]" }
}

/// JSON for scripting. One document per call.
pub struct JsonRenderer;

impl ResultRenderer for JsonRenderer {
    fn render(&self, input: &SizingInput, result: &SizingResult) -> String {
        let doc = json!({ "input": input, "result": result });
        pretty(&doc)
    }

    fn render_error(&self, input: &SizingInput, error: &CalcError) -> String {
        let doc = json!({
            "input": input,
            "code": error.error_code(),
            "error": error,
            "message": error.to_string(),
        });
        pretty(&doc)
    }

    fn render_history(&self, log: &SizingLog) -> String {
        match log.to_json() {
            Ok(json) => format!("{}\n", json),
            Err(e) => format!("{{\"error\": \"{}\"}}\n", e),
        }
    }
}

fn pretty(value: &serde_json::Value) -> String {
    let mut text = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
    text.push('\n');
    text
}

/// SVG section diagram, errors as SVG comments.
pub struct SvgRenderer;

impl ResultRenderer for SvgRenderer {
    fn render(&self, input: &SizingInput, result: &SizingResult) -> String {
        SectionDiagram::new(&input.bounding_box, result).to_svg()
    }

    fn render_error(&self, input: &SizingInput, error: &CalcError) -> String {
        format!("<!-- {} {}: {} -->\n", error.error_code(), input.label, error)
    }

    fn render_history(&self, log: &SizingLog) -> String {
        format!("<!-- {} results in session -->\n", log.len())
    }
}
