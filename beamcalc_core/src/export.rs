//! Pluggable export sinks.
//!
//! A sink receives the final section and the original bounding box and places
//! a structural element in some downstream tool (a CAD host, a log, a test
//! buffer). Sinks fail on their own: [`export_result`] reports the outcome but
//! never turns an export failure into a sizing failure.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::calculations::SizingResult;
use crate::geometry::BoundingBox;

/// Why a sink could not place a beam.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExportError {
    /// No host application is attached. This is the normal case outside CAD.
    #[error("Export host '{host}' is not available")]
    HostUnavailable { host: String },

    /// The host refused the element.
    #[error("Export host '{host}' rejected the beam: {reason}")]
    Rejected { host: String, reason: String },
}

/// A beam as handed to a downstream tool.
///
/// The element's axis runs from `(x_min, y_min)` to `(x_max, y_max)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeamPlacement {
    pub start: (f64, f64),
    pub end: (f64, f64),
    pub depth: f64,
    pub width: f64,
}

impl BeamPlacement {
    pub fn new(bounding_box: &BoundingBox, depth: f64, width: f64) -> Self {
        BeamPlacement {
            start: (bounding_box.x_min, bounding_box.y_min),
            end: (bounding_box.x_max, bounding_box.y_max),
            depth,
            width,
        }
    }
}

/// Trait for export consumers.
///
/// Implement this to push sized beams into an external authoring tool.
pub trait ExportSink {
    /// Place one beam.
    fn place_beam(&mut self, bounding_box: &BoundingBox, depth: f64, width: f64) -> Result<(), ExportError>;

    /// Returns a human-readable name for this sink.
    fn name(&self) -> &str;
}

/// What happened when a result was exported.
#[derive(Debug, Clone, PartialEq)]
pub enum ExportOutcome {
    Placed,
    /// No host attached; nothing to do
    Skipped,
    Failed(ExportError),
}

/// Send a sizing result to `sink`, absorbing any failure.
pub fn export_result(sink: &mut dyn ExportSink, bounding_box: &BoundingBox, result: &SizingResult) -> ExportOutcome {
    match sink.place_beam(bounding_box, result.depth, result.width) {
        Ok(()) => ExportOutcome::Placed,
        Err(ExportError::HostUnavailable { host }) => {
            info!(sink = sink.name(), %host, "export host not attached, skipping");
            ExportOutcome::Skipped
        }
        Err(err) => {
            warn!(sink = sink.name(), error = %err, "beam export failed");
            ExportOutcome::Failed(err)
        }
    }
}

/// Stands in for a CAD host that is not running.
pub struct NoHostSink {
    host: String,
}

impl NoHostSink {
    pub fn new(host: impl Into<String>) -> Self {
        Self { host: host.into() }
    }
}

impl ExportSink for NoHostSink {
    fn place_beam(&mut self, _bounding_box: &BoundingBox, _depth: f64, _width: f64) -> Result<(), ExportError> {
        Err(ExportError::HostUnavailable {
            host: self.host.clone(),
        })
    }

    fn name(&self) -> &str {
        "no_host_sink"
    }
}

/// A sink that keeps placements in a `Vec` for testing and inspection.
#[derive(Default)]
pub struct RecordingSink {
    /// Collected placements.
    pub placements: Vec<BeamPlacement>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ExportSink for RecordingSink {
    fn place_beam(&mut self, bounding_box: &BoundingBox, depth: f64, width: f64) -> Result<(), ExportError> {
        self.placements.push(BeamPlacement::new(bounding_box, depth, width));
        Ok(())
    }

    fn name(&self) -> &str {
        "recording_sink"
    }
}

/// A sink that logs placements using the `tracing` crate.
#[derive(Default)]
pub struct TracingSink {
    placed: usize,
}

impl TracingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of beams placed so far.
    pub fn placed(&self) -> usize {
        self.placed
    }
}

impl ExportSink for TracingSink {
    fn place_beam(&mut self, bounding_box: &BoundingBox, depth: f64, width: f64) -> Result<(), ExportError> {
        let placement = BeamPlacement::new(bounding_box, depth, width);
        self.placed += 1;
        info!(
            start = ?placement.start,
            end = ?placement.end,
            depth,
            width,
            "beam_placed"
        );
        Ok(())
    }

    fn name(&self) -> &str {
        "tracing_sink"
    }
}
