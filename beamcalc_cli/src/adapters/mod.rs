//! Presentation adapters.
//!
//! Every front end does two things: collect the scalar inputs and render what
//! comes back. Both halves are traits so sources and renderers can be swapped
//! independently while the sizing call stays the same.

pub mod input;
pub mod render;

use anyhow::Result;
use beamcalc_core::history::SizingLog;
use beamcalc_core::{CalcError, SizingInput, SizingResult};

pub use input::{FlagInput, PromptInput};
pub use render::{JsonRenderer, SvgRenderer, TextRenderer};

/// Something that can produce sizing requests.
pub trait InputSource {
    /// Next request, or `None` when the source is exhausted.
    fn collect(&mut self) -> Result<Option<SizingInput>>;
}

/// Something that can turn results into output text.
pub trait ResultRenderer {
    fn render(&self, input: &SizingInput, result: &SizingResult) -> String;

    fn render_error(&self, input: &SizingInput, error: &CalcError) -> String;

    /// Summary of a whole session.
    fn render_history(&self, log: &SizingLog) -> String;
}
