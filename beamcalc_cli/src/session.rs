//! One CLI session: the sizing call, the session log and the optional export
//! sink, wired to whichever input source and renderer the user picked.

use std::io::Write;

use anyhow::Result;
use beamcalc_core::export::{export_result, ExportOutcome, ExportSink};
use beamcalc_core::history::SizingLog;
use beamcalc_core::{calculate, CalcError, SizingInput, SizingResult};
use tracing::{debug, info};

use crate::adapters::{InputSource, ResultRenderer};

pub struct Session {
    renderer: Box<dyn ResultRenderer>,
    sink: Option<Box<dyn ExportSink>>,
    log: SizingLog,
}

impl Session {
    pub fn new(renderer: Box<dyn ResultRenderer>, sink: Option<Box<dyn ExportSink>>) -> Self {
        Self {
            renderer,
            sink,
            log: SizingLog::new(),
        }
    }

    pub fn log(&self) -> &SizingLog {
        &self.log
    }

    /// Size one request, record it and hand it to the export sink.
    pub fn size(&mut self, input: SizingInput) -> Result<SizingResult, CalcError> {
        let result = calculate(&input)?;

        if let Some(sink) = self.sink.as_deref_mut() {
            let outcome = export_result(sink, &input.bounding_box, &result);
            debug!(?outcome, "export finished");
            if outcome == ExportOutcome::Placed {
                info!(label = %input.label, "beam exported");
            }
        }

        self.log.append(input, result);
        Ok(result)
    }

    /// Drain `source`, writing each rendered result or error to `out`.
    ///
    /// Returns the number of requests that failed.
    pub fn run(&mut self, source: &mut dyn InputSource, out: &mut dyn Write) -> Result<usize> {
        let mut failures = 0;
        while let Some(input) = source.collect()? {
            match self.size(input.clone()) {
                Ok(result) => write!(out, "{}", self.renderer.render(&input, &result))?,
                Err(error) => {
                    failures += 1;
                    write!(out, "{}", self.renderer.render_error(&input, &error))?;
                }
            }
        }
        Ok(failures)
    }

    pub fn write_history(&self, out: &mut dyn Write) -> Result<()> {
        write!(out, "{}", self.renderer.render_history(&self.log))?;
        Ok(())
    }
}
